use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub price_per_seat: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovie {
    pub title: String,
    pub price_per_seat: f64,
}

impl NewMovie {
    pub fn with_id(self, id: i64) -> Movie {
        Movie {
            id,
            title: self.title,
            price_per_seat: self.price_per_seat,
        }
    }
}
