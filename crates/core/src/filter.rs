//! Query engine over an in-memory record sequence
//!
//! Both functions are pure. `filter` narrows the candidate sequence one
//! criterion at a time (each requested trait is its own narrowing step), so the
//! result is always an order-preserving subsequence of the input.

use crate::animal::Animal;
use crate::criteria::Criteria;

/// Return the records matching every constraint in `criteria`, in input order.
///
/// Empty criteria returns the whole input.
pub fn filter<'a>(criteria: &Criteria, records: &'a [Animal]) -> Vec<&'a Animal> {
    let mut results: Vec<&Animal> = records.iter().collect();

    for trait_name in &criteria.personality_traits {
        results.retain(|animal| animal.has_trait(trait_name));
    }
    if let Some(diet) = &criteria.diet {
        results.retain(|animal| diet.matches(&animal.diet));
    }
    if let Some(species) = &criteria.species {
        results.retain(|animal| species.matches(&animal.species));
    }
    if let Some(name) = &criteria.name {
        results.retain(|animal| name.matches(&animal.name));
    }

    results
}

/// Return the first record whose id equals `id`.
pub fn find_by_id<'a>(id: &str, records: &'a [Animal]) -> Option<&'a Animal> {
    records.iter().find(|animal| animal.id == id)
}
