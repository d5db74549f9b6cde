use unkey_client::models::{
    KeyCreditsData, KeyCreditsRefill, RefillInterval, UpdateKeyCreditsData,
};
use unkey_tfsdk::{Attr, AttributePath, Diagnostic, TfObject};

use crate::models::{CreditsModel, RefillModel};

fn refill_to_api(refill: &TfObject<RefillModel>) -> Result<Option<KeyCreditsRefill>, Diagnostic> {
    let Some(refill) = refill.known() else {
        return Ok(None);
    };

    let path = AttributePath::attribute_root("credits")
        .attribute("refill")
        .attribute("interval");
    let interval = refill
        .interval
        .known_str()
        .ok_or_else(|| {
            Diagnostic::error(
                "Invalid Refill Interval",
                "credits.refill.interval must be set when refill is configured.",
            )
            .with_attribute(path.clone())
        })?
        .parse::<RefillInterval>()
        .map_err(|e| Diagnostic::error("Invalid Refill Interval", e).with_attribute(path))?;

    Ok(Some(KeyCreditsRefill {
        interval,
        amount: refill.amount.known().copied().unwrap_or_default(),
        refill_day: refill.refill_day.known().copied(),
    }))
}

/// Credits for a create request.
///
/// Null or unknown yields `Ok(None)`. A refill is sent only when the plan
/// sets one.
///
/// # Errors
///
/// Returns a diagnostic on `credits.refill.interval` when the interval is
/// missing or not `daily`/`monthly`.
pub fn credits_to_api(
    credits: &TfObject<CreditsModel>,
) -> Result<Option<KeyCreditsData>, Diagnostic> {
    let Some(credits) = credits.known() else {
        return Ok(None);
    };
    Ok(Some(KeyCreditsData {
        remaining: credits.remaining.known().copied(),
        refill: refill_to_api(&credits.refill)?,
    }))
}

/// Credits for an update request. Same mapping as [`credits_to_api`]; an
/// absent refill is sent as null and removes the current one.
///
/// # Errors
///
/// See [`credits_to_api`].
pub fn credits_to_update_api(
    credits: &TfObject<CreditsModel>,
) -> Result<Option<UpdateKeyCreditsData>, Diagnostic> {
    let Some(credits) = credits.known() else {
        return Ok(None);
    };
    Ok(Some(UpdateKeyCreditsData {
        remaining: credits.remaining.known().copied(),
        refill: refill_to_api(&credits.refill)?,
    }))
}

/// Credits attribute from an API response. Absent credits and an absent
/// refill both read as null.
#[must_use]
pub fn credits_from_api(credits: Option<&KeyCreditsData>) -> TfObject<CreditsModel> {
    let Some(credits) = credits else {
        return Attr::Null;
    };
    let refill = credits.refill.as_ref().map(|refill| RefillModel {
        interval: Attr::Known(refill.interval.to_string()),
        amount: Attr::Known(refill.amount),
        refill_day: refill.refill_day.into(),
    });
    Attr::Known(CreditsModel {
        remaining: credits.remaining.into(),
        refill: refill.into(),
    })
}
