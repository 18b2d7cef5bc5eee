use serde::Deserialize;

// user property
//  ├── id
//  ├── property
//  │    ├── id        (property type, 13 = Private Island)
//  │    └── name
//  ├── status        ("none" | "rented" | "in_use" | ...)
//  ├── happy
//  ├── upkeep
//  │    ├── property
//  │    └── staff
//  ├── market_price
//  ├── modifications []
//  ├── staff [] { type, amount }
//  ├── used_by [] { id, name }
//  ├── rented_by { id, name }   (when rented)
//  └── cost / cost_per_day / rental_period / rental_period_remaining (when rented)

#[derive(Debug, Deserialize)]
pub struct RawProperty {
    pub id: Option<i64>,
    pub property: Option<PropertyKind>,
    pub status: Option<String>,
    pub happy: Option<i64>,
    pub upkeep: Option<Upkeep>,
    pub market_price: Option<i64>,
    #[serde(default)]
    pub modifications: Vec<String>,
    #[serde(default)]
    pub staff: Vec<Staff>,
    #[serde(default)]
    pub used_by: Vec<UsedBy>,
    pub rented_by: Option<RentedBy>,
    pub cost: Option<i64>,
    pub cost_per_day: Option<i64>,
    pub rental_period: Option<i64>,
    pub rental_period_remaining: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct PropertyKind {
    pub id: Option<i64>,
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Upkeep {
    pub property: Option<i64>,
    pub staff: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Staff {
    #[serde(rename = "type")]
    pub staff_type: String,
    pub amount: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsedBy {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RentedBy {
    pub name: Option<String>,
}

// market rental listing
//  ├── happy
//  ├── cost_per_day
//  ├── rental_period
//  ├── market_price
//  ├── upkeep
//  └── modifications []

/// A single rental listing as it comes off the wire. Absent or null fields are 0.
#[derive(Debug, Default, Deserialize)]
pub struct RawRentalListing {
    pub happy: Option<i64>,
    pub cost_per_day: Option<i64>,
    pub rental_period: Option<i64>,
}
