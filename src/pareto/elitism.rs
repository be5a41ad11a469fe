//! Elitist survivor selection (NSGA-II style).

use super::crowding::assign_crowding;
use super::sort::rank_population;
use crate::model::Individual;

/// Truncates `combined` (parents + offspring) to at most `size` survivors.
///
/// Fronts are taken whole in rank order. Each visited front is ordered by
/// descending crowding distance; the first front that does not fit is cut
/// to the remaining capacity and no later front is considered. Survivors
/// keep the `rank` and `crowding_distance` assigned here.
pub fn select_survivors(mut combined: Vec<Individual>, size: usize) -> Vec<Individual> {
    let fronts = rank_population(&mut combined);
    let mut chosen: Vec<usize> = Vec::with_capacity(size.min(combined.len()));

    for mut front in fronts {
        if chosen.len() >= size {
            break;
        }
        assign_crowding(&mut combined, &front);
        front.sort_by(|&a, &b| {
            combined[b]
                .crowding_distance
                .total_cmp(&combined[a].crowding_distance)
        });

        let remaining = size - chosen.len();
        if front.len() <= remaining {
            chosen.extend(front);
        } else {
            chosen.extend_from_slice(&front[..remaining]);
            break;
        }
    }

    let mut slots: Vec<Option<Individual>> = combined.into_iter().map(Some).collect();
    chosen
        .into_iter()
        .filter_map(|i| slots[i].take())
        .collect()
}
