//! Product inventory browser.
//!
//! Demonstrates the list view over a product catalog: paging with
//! `←`/`→`, sorting with `s`/`S`, filter-as-you-type with `/`, and page
//! size cycling with `p`.

use bubbletea_listview::prelude::*;
use bubbletea_rs::{Cmd, Model, Msg, Program};
use std::fmt;

#[derive(Clone)]
struct Product {
    id: u32,
    name: String,
    price: f64,
    stock: u32,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:<3} {:<24} ${:>8.2}  {:>4} in stock",
            self.id, self.name, self.price, self.stock
        )
    }
}

impl Item for Product {
    fn filter_value(&self) -> String {
        self.name.clone()
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.as_str().into()),
            "price" => Some(self.price.into()),
            "stock" => Some(self.stock.into()),
            _ => None,
        }
    }
}

fn catalog() -> Vec<Product> {
    let names = [
        "Mechanical keyboard",
        "Wireless mouse",
        "USB-C hub",
        "27\" monitor",
        "Laptop stand",
        "Webcam",
        "Desk mat",
        "Headset",
        "Microphone arm",
        "Ring light",
        "HDMI cable",
        "Ethernet switch",
        "External SSD",
        "Memory card",
        "Phone dock",
        "Cable organizer",
        "Monitor arm",
        "Footrest",
        "Desk lamp",
        "Whiteboard",
        "Label printer",
        "Paper shredder",
        "Office chair",
        "Standing desk",
        "Power strip",
        "UPS battery",
        "Projector",
        "Conference speaker",
        "Document camera",
        "Barcode scanner",
    ];
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Product {
            id: i as u32 + 1,
            name: name.to_string(),
            price: 9.90 + (i as f64 * 13.7) % 240.0,
            stock: (i as u32 * 7) % 90,
        })
        .collect()
}

struct App {
    list: ListView<Product>,
    last_event: String,
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let mut list = ListView::new(catalog(), 90, 20)
            .with_title("Inventory / Products")
            .with_sort_keys(&["name", "price", "stock"])
            .with_page_sizes(&[10, 25, 50]);
        list.set_status_bar_item_name("product", "products");

        let app = Self {
            list,
            last_event: String::new(),
        };
        (app, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(page) = msg.downcast_ref::<PageChangedMsg>() {
            self.last_event = format!("page -> {}", page.page);
        } else if let Some(sort) = msg.downcast_ref::<SortChangedMsg>() {
            self.last_event = format!("sort -> {} ({:?})", sort.key, sort.direction);
        } else if let Some(size) = msg.downcast_ref::<PageSizeChangedMsg>() {
            self.last_event = format!("page size -> {}", size.size);
        } else if let Some(filter) = msg.downcast_ref::<FilterChangedMsg>() {
            self.last_event = format!("filter \"{}\" -> {} matches", filter.query, filter.match_count);
        }
        self.list.update(msg)
    }

    fn view(&self) -> String {
        let mut out = self.list.view();
        if !self.last_event.is_empty() {
            out.push_str("\n  ");
            out.push_str(&self.last_event);
        }
        out
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<App>::builder().build()?;
    program.run().await?;
    Ok(())
}
