// src/domain/property.rs

use crate::torn::models::RawProperty;

/// Torn's property type id for a Private Island.
pub const PRIVATE_ISLAND: i64 = 13;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyStatus {
    /// Torn reports `none`: empty and free to rent out.
    Available,
    Rented,
    InUse,
    Other(String),
}

impl PropertyStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "none" => PropertyStatus::Available,
            "rented" => PropertyStatus::Rented,
            "in_use" => PropertyStatus::InUse,
            other => PropertyStatus::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PropertyStatus::Available => "Available to Rent",
            PropertyStatus::Rented => "Rented",
            PropertyStatus::InUse => "In Use",
            PropertyStatus::Other(s) => s.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StaffMember {
    pub staff_type: String,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tenant {
    pub name: String,
}

/// Current terms of a property that is rented out.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalTerms {
    pub tenant: Option<String>,
    pub cost_per_day: i64,
    pub rental_period: i64,
    pub days_left: Option<i64>,
    /// Total rent as reported by the API.
    pub cost: Option<i64>,
}

impl RentalTerms {
    pub fn total_cost(&self) -> i64 {
        self.cost.unwrap_or(self.cost_per_day * self.rental_period)
    }
}

/// A property owned by the user, flattened from the API payload.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedProperty {
    pub id: i64,
    pub property_type_id: i64,
    pub property_name: String,
    pub status: PropertyStatus,
    pub happy: i64,
    pub property_upkeep: i64,
    pub staff_upkeep: i64,
    pub market_price: i64,
    pub modifications: Vec<String>,
    pub staff: Vec<StaffMember>,
    pub used_by: Vec<Tenant>,
    pub rental: Option<RentalTerms>,
}

impl OwnedProperty {
    /// Builds an `OwnedProperty` from the raw API record.
    /// The property id and type are required, everything else defaults.
    pub fn from_raw(raw: &RawProperty) -> Result<Self, String> {
        let id = raw.id.ok_or("Missing property id")?;
        let kind = raw.property.as_ref().ok_or("Missing property kind")?;
        let property_type_id = kind.id.ok_or("Missing property type id")?;

        let status = PropertyStatus::parse(raw.status.as_deref().unwrap_or(""));

        let is_rented = status == PropertyStatus::Rented || raw.rented_by.is_some();
        let rental = if is_rented && (raw.rented_by.is_some() || raw.cost_per_day.is_some()) {
            Some(RentalTerms {
                tenant: raw.rented_by.as_ref().and_then(|t| t.name.clone()),
                cost_per_day: raw.cost_per_day.unwrap_or(0),
                rental_period: raw.rental_period.unwrap_or(0),
                days_left: raw.rental_period_remaining,
                cost: raw.cost,
            })
        } else {
            None
        };

        let upkeep = raw.upkeep.as_ref();

        Ok(OwnedProperty {
            id,
            property_type_id,
            property_name: kind.name.clone().unwrap_or_default(),
            status,
            happy: raw.happy.unwrap_or(0),
            property_upkeep: upkeep.and_then(|u| u.property).unwrap_or(0),
            staff_upkeep: upkeep.and_then(|u| u.staff).unwrap_or(0),
            market_price: raw.market_price.unwrap_or(0),
            modifications: raw.modifications.clone(),
            staff: raw
                .staff
                .iter()
                .map(|s| StaffMember {
                    staff_type: s.staff_type.clone(),
                    amount: s.amount,
                })
                .collect(),
            used_by: raw
                .used_by
                .iter()
                .map(|u| Tenant {
                    name: u.name.clone(),
                })
                .collect(),
            rental,
        })
    }

    pub fn is_available(&self) -> bool {
        self.status == PropertyStatus::Available
    }
}

/// Keeps the properties of one type that are not in use by the owner,
/// with the ones available to rent first. Relative order is otherwise kept.
pub fn select_rentable(properties: &[OwnedProperty], property_type_id: i64) -> Vec<OwnedProperty> {
    let mut selected: Vec<OwnedProperty> = properties
        .iter()
        .filter(|p| p.property_type_id == property_type_id && p.status != PropertyStatus::InUse)
        .cloned()
        .collect();

    // sort_by_key is stable
    selected.sort_by_key(|p| !p.is_available());
    selected
}

/// Splits rentable properties into (available, rented). Anything else is left out.
pub fn partition_by_status(
    properties: &[OwnedProperty],
) -> (Vec<&OwnedProperty>, Vec<&OwnedProperty>) {
    let available = properties.iter().filter(|p| p.is_available()).collect();
    let rented = properties
        .iter()
        .filter(|p| p.status == PropertyStatus::Rented)
        .collect();
    (available, rented)
}
