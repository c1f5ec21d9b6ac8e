//! Report filtering example: conditions, grouping, and parameters
//!
//! Run with:
//! `cargo run --example report_filters -p gaql`

use gaql::{Condition, GaqlError, ParameterValue, QueryBuilder};

fn main() -> Result<(), GaqlError> {
    // A device-performance report with the full condition surface.
    let mut qb = QueryBuilder::new();
    qb.select(&["segments.device", "SUM(metrics.clicks)"])?
        .from("campaign")?
        .where_in("campaign.status", vec!["ENABLED", "PAUSED"])?
        .where_not_in("segments.device", vec!["CONNECTED_TV"])?
        .where_between("metrics.impressions", 1_000, 50_000)?
        .where_not_null("campaign.start_date")?
        .where_during("segments.date", "THIS_MONTH")?
        .group_by(&["segments.device"])?
        .order_by_desc("SUM(metrics.clicks)")?
        .parameters(&[
            ("include_drafts", ParameterValue::Bool(false)),
            ("omit_unselected_resource_names", ParameterValue::Bool(true)),
        ])?;
    println!("{}", qb.build()?);

    // Match patterns go through the backtracking screen; a safe pattern
    // passes, a multiplicative one does not.
    let mut qb = QueryBuilder::new();
    qb.select(&["campaign.id"])?
        .from("campaign")?
        .where_regexp_match("campaign.name", "(?i).*brand.*")?;
    println!("{}", qb.build()?);

    match qb.where_regexp_match("campaign.name", ".*.*") {
        Ok(_) => unreachable!(),
        Err(e) => println!("rejected: {e}"),
    }

    // Conditions can be built once and shared across builders.
    let enabled = Condition::eq("campaign.status", "ENABLED")?;
    for resource in ["campaign", "ad_group"] {
        let mut qb = QueryBuilder::new();
        qb.select(&["campaign.id"])?
            .from(resource)?
            .where_condition(enabled.clone())?;
        println!("{}", qb.build()?);
    }

    Ok(())
}
