//! Iterative edge-color refinement.
//!
//! The refinement works on an *edge-color matrix*: the signed incidence matrix of
//! a DAG whose `±1` entries are gradually replaced by `∓c` color ids. For an edge
//! `u -> v` colored `c`, cell `(u, v)` holds `+c` and cell `(v, u)` holds `-c`, so a
//! row lists the colors of a node's outgoing edges as positives and of its incoming
//! edges as negatives.
//!
//! # Pass Structure
//!
//! One pass peels the graph layer by layer. A *residual* copy of the incidence
//! matrix starts full; each round takes its current sources (rows with no negative
//! and at least one non-zero entry), recolors every edge leaving them, and clears
//! their rows and columns from the residual. When the residual is empty the sinks
//! captured at the start of the pass get a final round. A sink has no outgoing
//! edge in the pass orientation, so that round only closes the pass and never
//! changes a color.
//!
//! Recoloring a round works on links `(down, up)` where `up` is a source and `down`
//! one of its successors. Each link gets the descriptor
//! `[descriptor(down), descriptor(up)]`, a node descriptor being the sorted non-zero
//! entries of its row. Links are stably sorted by descriptor (shorter first, then
//! element-wise) and walked in order:
//!
//! - a link whose descriptor equals the previous link's takes the previous link's color
//! - otherwise it keeps its color unless that color was already handed out in an
//!   earlier round of this pass, equals the previous link's color, or was already
//!   used in this round, in which case it gets a fresh color
//!
//! # Fixed Point
//!
//! Passes repeat until one leaves the matrix unchanged. Between passes the
//! orientation flips (the color matrix is transposed and the residual is taken from
//! the reversed incidence matrix), so refinement alternates between looking
//! downstream and upstream.

use std::{
    cmp::Ordering,
    collections::{BTreeSet, HashSet},
};

use tracing::{debug, trace, warn};

use crate::{
    canonical::{CanonicalDescription, ColoringConfig},
    utils::Matrix,
    Error, Result,
};

/// The refinement state for one incidence matrix.
///
/// Most callers go through [`paint_graph`](crate::canonical::paint_graph); this type
/// exposes the individual passes for inspection.
///
/// # Examples
///
/// ```rust
/// use canongraph::canonical::EdgeColoring;
/// use canongraph::graph::DirectedGraph;
///
/// let graph = DirectedGraph::from_edges([(0, 1), (1, 2)]);
/// let mut coloring = EdgeColoring::new(&graph.incidence_matrix())?;
///
/// // The second edge sits one layer deeper and is split off in the first pass
/// assert!(coloring.pass()?);
/// assert_eq!(coloring.max_color(), 2);
/// # Ok::<(), canongraph::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct EdgeColoring {
    /// Edge colors in the current orientation
    colors: Matrix<i32>,
    /// Incidence matrix in the forward orientation
    incidence: Matrix<i32>,
    /// Largest color id handed out so far
    max_color: i32,
    /// Whether `colors` is currently transposed
    reversed: bool,
    /// Number of completed passes
    passes: usize,
}

/// One edge seen from the round that recolors it.
struct Link {
    /// Successor end of the edge
    down: usize,
    /// Source end of the edge
    up: usize,
    /// `[descriptor(down), descriptor(up)]`
    descriptor: [Vec<i32>; 2],
}

impl EdgeColoring {
    /// Starts a refinement from a signed incidence matrix.
    ///
    /// Every edge begins with color 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the matrix is not square.
    pub fn new(incidence: &Matrix<i32>) -> Result<Self> {
        if !incidence.is_square() {
            return Err(Error::InvalidDimensions {
                rows: incidence.rows(),
                cols: incidence.cols(),
            });
        }

        Ok(EdgeColoring {
            colors: incidence.clone(),
            incidence: incidence.clone(),
            max_color: 1,
            reversed: false,
            passes: 0,
        })
    }

    /// Returns the edge-color matrix in the forward orientation.
    #[must_use]
    pub fn colors(&self) -> Matrix<i32> {
        if self.reversed {
            self.colors.transpose()
        } else {
            self.colors.clone()
        }
    }

    /// Returns the largest color id assigned so far.
    #[must_use]
    pub fn max_color(&self) -> i32 {
        self.max_color
    }

    /// Returns the number of completed passes.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Returns `true` if the next pass walks the reversed graph.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Flips the orientation used by subsequent passes.
    pub fn reverse(&mut self) {
        self.colors = self.colors.transpose();
        self.reversed = !self.reversed;
    }

    /// Runs one full pass in the current orientation.
    ///
    /// # Returns
    ///
    /// `true` if any edge color changed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CyclicIncidence`] if a round finds no source while edges
    /// remain. The coloring is left partially updated in that case.
    pub fn pass(&mut self) -> Result<bool> {
        let before = self.colors.clone();
        let mut residual = if self.reversed {
            self.incidence.transpose()
        } else {
            self.incidence.clone()
        };

        let sinks = sinks(&residual);
        let mut label_set = HashSet::new();
        let mut round = 0usize;

        while !residual.is_all(&0) {
            let sources = sources(&residual);
            if sources.is_empty() {
                let remaining = residual
                    .iter_rows()
                    .filter(|row| row.iter().any(|&x| x != 0))
                    .count();
                return Err(Error::CyclicIncidence { remaining });
            }

            self.recolor(&sources, &mut label_set);
            for &s in &sources {
                residual.clear_row(s);
                residual.clear_col(s);
            }

            round += 1;
            trace!(
                pass = self.passes,
                round,
                sources = sources.len(),
                max_color = self.max_color,
                "peeled sources"
            );
        }
        // Sinks own no outgoing links, so this round leaves every color in place
        self.recolor(&sinks, &mut label_set);

        self.passes += 1;
        Ok(self.colors != before)
    }

    /// Refines until a pass changes nothing and returns the resulting description.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColoringDiverged`] if `config.max_passes` passes run without
    /// reaching a fixed point, or [`Error::CyclicIncidence`] for a cyclic input.
    pub fn run(mut self, config: &ColoringConfig) -> Result<CanonicalDescription> {
        loop {
            if self.passes >= config.max_passes {
                warn!(
                    max_passes = config.max_passes,
                    max_color = self.max_color,
                    "color refinement did not converge"
                );
                return Err(Error::ColoringDiverged(config.max_passes));
            }

            let changed = self.pass()?;
            debug!(
                pass = self.passes,
                reversed = self.reversed,
                max_color = self.max_color,
                changed,
                "coloring pass"
            );

            if !changed {
                break;
            }
            if config.alternate_directions {
                self.reverse();
            }
        }

        Ok(CanonicalDescription::from_colors(&self.colors()))
    }

    /// Recolors every edge from a node in `nodes` to one of its successors.
    fn recolor(&mut self, nodes: &[usize], label_set: &mut HashSet<i32>) {
        let colors = &mut self.colors;

        let mut edges = BTreeSet::new();
        for &up in nodes {
            for down in colors.find_in_col(up, |c: &i32| *c < 0) {
                edges.insert((down, up));
            }
        }

        let mut links: Vec<Link> = edges
            .into_iter()
            .map(|(down, up)| Link {
                down,
                up,
                descriptor: [node_descriptor(colors, down), node_descriptor(colors, up)],
            })
            .collect();
        links.sort_by(|a, b| compare_descriptors(&a.descriptor, &b.descriptor));

        let mut new_labels = HashSet::new();
        for (idx, link) in links.iter().enumerate() {
            let previous = idx.checked_sub(1).map(|p| &links[p]);
            let current = colors[(link.down, link.up)];

            match previous {
                Some(prev) if prev.descriptor == link.descriptor => {
                    colors[(link.down, link.up)] = colors[(prev.down, prev.up)];
                    colors[(link.up, link.down)] = colors[(prev.up, prev.down)];
                }
                _ => {
                    let clashes = label_set.contains(&current)
                        || previous.is_some_and(|prev| colors[(prev.down, prev.up)] == current)
                        || new_labels.contains(&current);
                    if clashes {
                        self.max_color += 1;
                        colors[(link.down, link.up)] = -self.max_color;
                        colors[(link.up, link.down)] = self.max_color;
                    }
                }
            }

            new_labels.insert(colors[(link.down, link.up)]);
        }

        label_set.extend(new_labels);
    }
}

/// Rows with no negative entry and at least one non-zero entry.
fn sources(residual: &Matrix<i32>) -> Vec<usize> {
    (0..residual.rows())
        .filter(|&r| {
            let row = residual.row(r);
            row.iter().all(|&x| x >= 0) && row.iter().any(|&x| x != 0)
        })
        .collect()
}

/// Rows with no positive entry and at least one non-zero entry.
fn sinks(residual: &Matrix<i32>) -> Vec<usize> {
    (0..residual.rows())
        .filter(|&r| {
            let row = residual.row(r);
            row.iter().all(|&x| x <= 0) && row.iter().any(|&x| x != 0)
        })
        .collect()
}

/// The sorted non-zero colors of `node`'s row.
pub(crate) fn node_descriptor(colors: &Matrix<i32>, node: usize) -> Vec<i32> {
    let mut descriptor: Vec<i32> = colors
        .row(node)
        .iter()
        .copied()
        .filter(|&c| c != 0)
        .collect();
    descriptor.sort_unstable();
    descriptor
}

/// Orders link descriptors component by component: shorter first, then element-wise.
fn compare_descriptors(a: &[Vec<i32>; 2], b: &[Vec<i32>; 2]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| x.len().cmp(&y.len()).then_with(|| x.cmp(y)))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}
