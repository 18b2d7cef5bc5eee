// report.rs
use crate::domain::OwnedProperty;
use crate::market::{CompResult, PriceTier};
use std::fmt::Write;

/// "$1,234,567"
pub fn format_money(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

fn header(out: &mut String, p: &OwnedProperty) {
    let _ = writeln!(
        out,
        "#{} {} [{}]  happy {}  upkeep {} + {} staff  market value {}",
        p.id,
        p.property_name,
        p.status.label(),
        p.happy,
        format_money(p.property_upkeep),
        format_money(p.staff_upkeep),
        format_money(p.market_price)
    );
    if !p.modifications.is_empty() {
        let _ = writeln!(out, "  modifications: {}", p.modifications.join(", "));
    }
    if !p.staff.is_empty() {
        let staff: Vec<String> = p
            .staff
            .iter()
            .map(|s| format!("{}: {}", s.staff_type, s.amount))
            .collect();
        let _ = writeln!(out, "  staff: {}", staff.join(", "));
    }
}

/// Comps summary and suggested prices for a unit that is free to rent.
pub fn render_available(p: &OwnedProperty, comps: &CompResult, table: &[PriceTier]) -> String {
    let mut out = String::new();
    header(&mut out, p);

    if comps.has_data() {
        let _ = writeln!(
            out,
            "  comps: {}  p25 {}  median {}  p75 {}",
            comps.count,
            format_money(comps.p25),
            format_money(comps.median),
            format_money(comps.p75)
        );
        for s in &comps.samples {
            let _ = writeln!(
                out,
                "    happy {:>6}  {}/day  {} days",
                s.similarity_value,
                format_money(s.price_per_period),
                s.period_length
            );
        }
    } else {
        let _ = writeln!(out, "  comps: none found");
    }

    for tier in table {
        if tier.is_available() {
            let _ = writeln!(
                out,
                "  {:>3} days: {}/day  {} total",
                tier.duration,
                format_money(tier.per_day_price),
                format_money(tier.total_price)
            );
        } else {
            let _ = writeln!(out, "  {:>3} days: unavailable", tier.duration);
        }
    }
    out
}

/// Current tenant and terms for a unit that is rented out.
pub fn render_rented(p: &OwnedProperty) -> String {
    let mut out = String::new();
    header(&mut out, p);

    if !p.used_by.is_empty() {
        let names: Vec<&str> = p.used_by.iter().map(|u| u.name.as_str()).collect();
        let _ = writeln!(out, "  used by: {}", names.join(", "));
    }
    if let Some(terms) = &p.rental {
        let _ = writeln!(
            out,
            "  rented by: {}",
            terms.tenant.as_deref().unwrap_or("N/A")
        );
        let left = terms
            .days_left
            .map(|d| format!(", {d} days left"))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "  {}/day for {} days ({} total){}",
            format_money(terms.cost_per_day),
            terms.rental_period,
            format_money(terms.total_cost()),
            left
        );
    }
    out
}
