//! Operator pool.
//!
//! Six stochastic route moves drive the search:
//!
//! | Operator | Routes | Move |
//! |---|---|---|
//! | [`Operator::Reorder`] | 1 | swap two positions |
//! | [`Operator::Transfer`] | 2, same depot | move one task between drones |
//! | [`Operator::Migrate`] | 2, other depot | move one task across depots |
//! | [`Operator::Consolidate`] | 2 | merge a route into another |
//! | [`Operator::WindowGreedy`] | 1 | sort by desired-window end |
//! | [`Operator::Reposition`] | 1 | cheapest reinsertion of one task |

mod moves;

pub use moves::{consolidate, reorder, reposition, transfer, window_greedy};

use crate::model::{Individual, Instance};
use rand::seq::IndexedRandom;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A route mutation move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    Reorder,
    Transfer,
    Migrate,
    Consolidate,
    WindowGreedy,
    Reposition,
}

impl Operator {
    /// All operators, in pool order.
    pub const ALL: [Operator; 6] = [
        Operator::Reorder,
        Operator::Transfer,
        Operator::Migrate,
        Operator::Consolidate,
        Operator::WindowGreedy,
        Operator::Reposition,
    ];

    /// Position of this operator in [`Operator::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operator::Reorder => "reorder",
            Operator::Transfer => "transfer",
            Operator::Migrate => "migrate",
            Operator::Consolidate => "consolidate",
            Operator::WindowGreedy => "window_greedy",
            Operator::Reposition => "reposition",
        }
    }

    /// Number of routes the move touches.
    pub fn arity(&self) -> usize {
        match self {
            Operator::Transfer | Operator::Migrate | Operator::Consolidate => 2,
            _ => 1,
        }
    }

    /// Produces a child of `parent` by applying this move to a random
    /// fleet slot (and a partner slot for two-route moves).
    ///
    /// The child's routes are fresh copies and its objectives are reset;
    /// the caller must propagate timing and evaluate it. `Transfer` prefers
    /// a partner from the same depot group and `Migrate` one from another
    /// group; either falls back to any other slot when no such partner
    /// exists. With a single slot, two-route moves return the parent's
    /// routes unchanged.
    pub fn apply<R: Rng>(&self, instance: &Instance, parent: &Individual, rng: &mut R) -> Individual {
        let mut routes = parent.routes.clone();
        if routes.is_empty() {
            return Individual::new(routes);
        }
        let slot = rng.random_range(0..routes.len());

        match self {
            Operator::Reorder => routes[slot] = reorder(&routes[slot], rng),
            Operator::WindowGreedy => routes[slot] = window_greedy(instance, &routes[slot]),
            Operator::Reposition => routes[slot] = reposition(instance, &routes[slot], rng),
            Operator::Transfer | Operator::Migrate | Operator::Consolidate => {
                if let Some(other) = self.partner(instance, slot, routes.len(), rng) {
                    let (a, b) = if *self == Operator::Consolidate {
                        consolidate(&routes[slot], &routes[other])
                    } else {
                        transfer(&routes[slot], &routes[other], rng)
                    };
                    routes[slot] = a;
                    routes[other] = b;
                }
            }
        }

        Individual::new(routes)
    }

    fn partner<R: Rng>(
        &self,
        instance: &Instance,
        slot: usize,
        slots: usize,
        rng: &mut R,
    ) -> Option<usize> {
        let preferred = match self {
            Operator::Transfer => instance.partners(slot, true),
            Operator::Migrate => instance.partners(slot, false),
            _ => Vec::new(),
        };
        let preferred: Vec<usize> = preferred.into_iter().filter(|&s| s < slots).collect();
        if let Some(&other) = preferred.choose(rng) {
            return Some(other);
        }
        let any: Vec<usize> = (0..slots).filter(|&s| s != slot).collect();
        any.choose(rng).copied()
    }
}
