//! Sort operations and the comparison rule for list views.
//!
//! Sorting is a stable reorder of the filtered items by a single key.
//! Direction is applied to the comparator, not the output, so ties keep
//! their insertion order in both directions.

use super::types::{Item, SortDirection, SortState, SortValue};
use super::Model;
use std::cmp::Ordering;

impl<I: Item + Send + Sync + 'static> Model<I> {
    /// Selects a sort key with toggle semantics.
    ///
    /// Selecting the key that is already active flips the direction;
    /// selecting a different key sorts ascending by it. The current page is
    /// left alone: re-sorting reorders what the user is looking at, it
    /// does not move them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bubbletea_listview::listview::{Item, Model, SortDirection, SortValue};
    /// # #[derive(Clone)]
    /// # struct Row(String);
    /// # impl std::fmt::Display for Row {
    /// #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    /// #         write!(f, "{}", self.0)
    /// #     }
    /// # }
    /// # impl Item for Row {
    /// #     fn filter_value(&self) -> String { self.0.clone() }
    /// #     fn sort_value(&self, key: &str) -> Option<SortValue> {
    /// #         (key == "name").then(|| self.0.as_str().into())
    /// #     }
    /// # }
    /// let mut list = Model::new(vec![Row("b".into()), Row("a".into())], 80, 24);
    ///
    /// list.set_sort_key("name");
    /// assert_eq!(list.sort_state().unwrap().direction, SortDirection::Ascending);
    /// assert_eq!(list.visible_items()[0].0, "a");
    ///
    /// list.set_sort_key("name");
    /// assert_eq!(list.sort_state().unwrap().direction, SortDirection::Descending);
    /// assert_eq!(list.visible_items()[0].0, "b");
    /// ```
    pub fn set_sort_key(&mut self, key: &str) {
        self.sort = Some(SortState::advance(self.sort.as_ref(), key));
    }

    /// Removes the active sort, restoring insertion order.
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Stable-sorts the rows in place according to the active sort.
    ///
    /// No-op when no sort is active.
    pub(super) fn apply_sort(&self, rows: &mut [I]) {
        let Some(sort) = &self.sort else {
            return;
        };
        let descending = sort.direction == SortDirection::Descending;
        rows.sort_by(|a, b| {
            let ord = compare_by_key(a, b, &sort.key);
            if descending {
                ord.reverse()
            } else {
                ord
            }
        });
    }
}

/// Compares two items by the named field.
///
/// When both items yield text the comparison is a case-sensitive string
/// compare. In every other case (numbers, mixed types, absent fields)
/// both sides are coerced to numbers, with non-numeric and absent values
/// ordering as `0` (see [`SortValue::coerce_number`]).
pub(super) fn compare_by_key<I: Item>(a: &I, b: &I, key: &str) -> Ordering {
    match (a.sort_value(key), b.sort_value(key)) {
        (Some(SortValue::Text(x)), Some(SortValue::Text(y))) => x.cmp(&y),
        (x, y) => {
            let x = x.map(|v| v.coerce_number()).unwrap_or(0.0);
            let y = y.map(|v| v.coerce_number()).unwrap_or(0.0);
            x.total_cmp(&y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Clone)]
    struct Product {
        name: String,
        price: Option<SortValue>,
    }

    impl fmt::Display for Product {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.name)
        }
    }

    impl Item for Product {
        fn filter_value(&self) -> String {
            self.name.clone()
        }

        fn sort_value(&self, key: &str) -> Option<SortValue> {
            match key {
                "name" => Some(self.name.as_str().into()),
                "price" => self.price.clone(),
                _ => None,
            }
        }
    }

    fn product(name: &str, price: Option<SortValue>) -> Product {
        Product {
            name: name.to_string(),
            price,
        }
    }

    #[test]
    fn test_text_fields_compare_case_sensitively() {
        let a = product("Zeta", None);
        let b = product("alpha", None);
        // Uppercase sorts before lowercase in a case-sensitive compare.
        assert_eq!(compare_by_key(&a, &b, "name"), Ordering::Less);
    }

    #[test]
    fn test_numeric_fields_compare_numerically() {
        let a = product("a", Some(SortValue::Number(9.0)));
        let b = product("b", Some(SortValue::Number(10.0)));
        assert_eq!(compare_by_key(&a, &b, "price"), Ordering::Less);
    }

    #[test]
    fn test_numeric_text_is_coerced() {
        // A "12.50" read from a loosely-typed source still orders as 12.5.
        let a = product("a", Some(SortValue::Text("12.50".into())));
        let b = product("b", Some(SortValue::Number(9.0)));
        assert_eq!(compare_by_key(&a, &b, "price"), Ordering::Greater);
    }

    #[test]
    fn test_non_numeric_and_absent_values_order_as_zero() {
        let garbage = product("a", Some(SortValue::Text("n/a".into())));
        let absent = product("b", None);
        let negative = product("c", Some(SortValue::Number(-1.0)));
        let positive = product("d", Some(SortValue::Number(0.5)));

        assert_eq!(compare_by_key(&garbage, &absent, "price"), Ordering::Equal);
        assert_eq!(
            compare_by_key(&garbage, &negative, "price"),
            Ordering::Greater
        );
        assert_eq!(compare_by_key(&absent, &positive, "price"), Ordering::Less);
    }

    #[test]
    fn test_nan_orders_as_zero() {
        let nan = product("a", Some(SortValue::Number(f64::NAN)));
        let zero = product("b", Some(SortValue::Number(0.0)));
        assert_eq!(compare_by_key(&nan, &zero, "price"), Ordering::Equal);
    }

    #[test]
    fn test_unknown_key_compares_equal() {
        let a = product("a", None);
        let b = product("b", None);
        assert_eq!(compare_by_key(&a, &b, "stock"), Ordering::Equal);
    }
}
