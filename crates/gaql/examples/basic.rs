//! Basic query building example
//!
//! Run with:
//! `cargo run --example basic -p gaql`

use gaql::{GaqlError, QueryBuilder};

fn main() -> Result<(), GaqlError> {
    // A minimal query: selection and source are the only required clauses.
    let mut qb = QueryBuilder::new();
    qb.select(&["campaign.id", "campaign.name"])?.from("campaign")?;
    println!("{}", qb.build()?);

    // Clauses render in the language's fixed order no matter when they
    // are added; the builder stays usable after build().
    qb.limit(50)?
        .where_eq("campaign.status", "ENABLED")?
        .where_during("segments.date", "LAST_30_DAYS")?
        .order_by_desc("campaign.id")?;
    println!("{}", qb.build()?);

    // String values are escaped by quote doubling, so hostile input
    // stays inside its literal.
    let mut qb = QueryBuilder::new();
    qb.select(&["campaign.id"])?
        .from("campaign")?
        .where_eq("campaign.name", "'; DROP TABLE campaigns; --")?;
    println!("{}", qb.build()?);

    // Invalid names are rejected before any state changes.
    let mut qb = QueryBuilder::new();
    match qb.from("campaign; DROP") {
        Ok(_) => unreachable!(),
        Err(e) => println!("rejected: {e}"),
    }

    Ok(())
}
