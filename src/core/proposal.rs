use crate::domain::model::{Quote, QuoteSelection};
use crate::domain::ports::Catalog;
use crate::utils::error::{QuoteError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identity printed on exported proposals. Defaults match the built-in
/// catalog; a catalog file's `[agency]` table can override any field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgencyProfile {
    pub name: String,
    pub contact_email: String,
    pub validity_days: u32,
    pub currency_symbol: String,
}

impl Default for AgencyProfile {
    fn default() -> Self {
        Self {
            name: "Brightlane Digital".to_string(),
            contact_email: "hello@brightlane.digital".to_string(),
            validity_days: 30,
            currency_symbol: "$".to_string(),
        }
    }
}

/// Render a selection snapshot as a plain-text proposal document.
///
/// Re-validates every id against the catalog even though the session
/// already did: selection snapshots can originate from an external or
/// replayed source, and an unknown add-on must fail loudly rather than be
/// silently omitted. Writing the returned string anywhere is the
/// [`Storage`](crate::domain::ports::Storage) implementor's job.
pub fn render_proposal(
    selection: &QuoteSelection,
    quote: &Quote,
    catalog: &impl Catalog,
    profile: &AgencyProfile,
) -> Result<String> {
    let service_name = match selection.service_id.as_deref() {
        Some(id) => catalog
            .find_service(id)
            .ok_or_else(|| QuoteError::UnknownService { id: id.to_string() })?
            .name
            .as_str(),
        None => "",
    };

    let tier = catalog
        .find_complexity_tier(&selection.complexity_tier_id)
        .ok_or_else(|| QuoteError::UnknownTier {
            id: selection.complexity_tier_id.clone(),
        })?;

    for id in &selection.add_on_ids {
        if catalog.find_add_on(id).is_none() {
            return Err(QuoteError::UnknownAddOn { id: id.clone() });
        }
    }

    let add_on_names = catalog
        .add_ons()
        .iter()
        .filter(|a| selection.add_on_ids.iter().any(|id| id == &a.id))
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!(
        "{agency} Project Proposal\n\
         \n\
         Service: {service}\n\
         Complexity: {tier}\n\
         Timeline: {months} months\n\
         Add-ons: {add_ons}\n\
         \n\
         Total Investment: {currency}{total}\n\
         \n\
         This proposal is valid for {days} days.\n\
         Contact us at {email} for more details.\n",
        agency = profile.name,
        service = service_name,
        tier = tier.name,
        months = selection.timeline_months,
        add_ons = add_on_names,
        currency = profile.currency_symbol,
        total = format_currency(&quote.total),
        days = profile.validity_days,
        email = profile.contact_email,
    ))
}

/// Thousands-separated rendering of a decimal amount. Totals are whole
/// units after rounding; any fractional part on line items is kept as-is.
pub fn format_currency(amount: &Decimal) -> String {
    let text = amount.to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}
