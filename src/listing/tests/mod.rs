mod go_to_page;
mod mutation;

use crate::listing::{ListController, Record, SortKey};

/// Minimal record used to exercise the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: u64,
    pub title: String,
    pub company: String,
    pub status: &'static str,
    pub salary: i64,
}

impl Record for Item {
    fn id(&self) -> u64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.company]
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "status" => Some(self.status.to_string()),
            "company" => Some(self.company.clone()),
            _ => None,
        }
    }

    fn sort_key(&self, column: &str) -> Option<SortKey> {
        match column {
            "title" => Some(SortKey::text(&self.title)),
            "salary" => Some(SortKey::Number(self.salary)),
            _ => None,
        }
    }

    fn stats_bucket(&self) -> Option<&'static str> {
        Some(self.status)
    }
}

pub fn item(id: u64, title: &str, status: &'static str) -> Item {
    Item {
        id,
        title: title.to_string(),
        company: format!("Company {}", id % 3),
        status,
        salary: (id as i64) * 100,
    }
}

/// Builds `count` items; the first `pending` of them are `pending`, the rest `approved`.
pub fn controller(count: u64, pending: u64, page_size: usize) -> ListController<Item> {
    let mut controller = ListController::new(page_size);
    controller.replace_all(
        (1..=count)
            .map(|id| {
                let status = if id <= pending { "pending" } else { "approved" };
                item(id, &format!("Offer {}", id), status)
            })
            .collect(),
    );
    controller
}
