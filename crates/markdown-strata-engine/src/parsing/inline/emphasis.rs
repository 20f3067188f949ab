//! Emphasis resolution over a [`DelimiterArray`].
//!
//! Matches are extracted one at a time. Each search scans left to right and
//! stops at the first closer that has an open delimiter of the same marker
//! before it, pairing it with the nearest such opener. Runs of unequal
//! length are consumed partially: the longer run keeps its remainder for a
//! later match.

use std::cmp::Ordering;
use std::ops::Range;

use log::debug;

use crate::parsing::rope::span::Span;

use super::{
    delimiter::{Delimiter, DelimiterArray},
    kinds::EmphasisMarker,
    types::EmphasisNode,
};

/// Most recent opener seen per marker during one scan.
#[derive(Debug, Default, Clone, Copy)]
struct Openers {
    asterisk: Option<usize>,
    underscore: Option<usize>,
    tilde: Option<usize>,
}

impl Openers {
    fn get(&self, marker: EmphasisMarker) -> Option<usize> {
        match marker {
            EmphasisMarker::Asterisk => self.asterisk,
            EmphasisMarker::Underscore => self.underscore,
            EmphasisMarker::Tilde => self.tilde,
        }
    }

    fn set(&mut self, marker: EmphasisMarker, idx: usize) {
        match marker {
            EmphasisMarker::Asterisk => self.asterisk = Some(idx),
            EmphasisMarker::Underscore => self.underscore = Some(idx),
            EmphasisMarker::Tilde => self.tilde = Some(idx),
        }
    }
}

/// A closer paired with its opener, before any slot is modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmphasisMatch {
    /// First opener of any marker seen by the scan. The next scan restarts here.
    pub restart: usize,
    pub opener: usize,
    pub closer: usize,
    pub marker: EmphasisMarker,
}

impl DelimiterArray {
    /// Resolves every emphasis in `indices`, appending the nodes to `nodes`.
    ///
    /// After each match the search restarts from the first opener of that
    /// search rather than after the closer, since openers before the closer
    /// may still pair with later delimiters.
    pub fn process_all_emphases(&mut self, indices: Range<usize>, nodes: &mut Vec<EmphasisNode>) {
        let end = indices.end.min(self.len());
        let mut start = indices.start;
        while let Some(restart) = self.process_emphasis(start..end, nodes) {
            start = restart;
        }
    }

    /// Resolves the first emphasis in `indices` and appends it to `nodes`.
    ///
    /// Returns the index to restart from, or `None` if nothing matched.
    pub fn process_emphasis(
        &mut self,
        indices: Range<usize>,
        nodes: &mut Vec<EmphasisNode>,
    ) -> Option<usize> {
        let m = self.find_emphasis(indices)?;
        let opener = self.live(m.opener);
        let closer = self.live(m.closer);

        // Whatever sits between the pair can never match again.
        for slot in &mut self.slots[m.opener + 1..m.closer] {
            *slot = None;
        }

        let category = m.marker.category();
        let (l1, l2) = (opener.run, closer.run);
        let node = match l1.cmp(&l2) {
            Ordering::Equal => {
                self.slots[m.opener] = None;
                self.slots[m.closer] = None;
                EmphasisNode {
                    level: l1,
                    category,
                    span: Span::new(opener.position - l1, closer.position),
                }
            }
            Ordering::Less => {
                self.slots[m.opener] = None;
                if let Some(d) = self.slots[m.closer].as_mut() {
                    d.run = l2 - l1;
                }
                EmphasisNode {
                    level: l1,
                    category,
                    span: Span::new(opener.position - l1, closer.position - (l2 - l1)),
                }
            }
            Ordering::Greater => {
                self.slots[m.closer] = None;
                // The opener gives up the characters next to the emphasized text.
                if let Some(d) = self.slots[m.opener].as_mut() {
                    d.run = l1 - l2;
                    d.position -= l2;
                }
                EmphasisNode {
                    level: l2,
                    category,
                    span: Span::new(opener.position - l2, closer.position),
                }
            }
        };

        debug!(
            "emphasis {:?} level {} at {:?} (slots {}..={})",
            node.category, node.level, node.span, m.opener, m.closer
        );
        nodes.push(node);
        Some(m.restart)
    }

    /// Finds the first closer in `indices` with a same-marker opener before it.
    pub fn find_emphasis(&self, indices: Range<usize>) -> Option<EmphasisMatch> {
        let mut openers = Openers::default();
        let mut first_opener: Option<usize> = None;

        for i in indices {
            let Some(d) = self.slots.get(i)?.as_ref() else {
                continue;
            };
            if d.can_close
                && let Some(opener) = openers.get(d.marker)
            {
                return Some(EmphasisMatch {
                    restart: first_opener.unwrap_or(opener),
                    opener,
                    closer: i,
                    marker: d.marker,
                });
            }
            if d.can_open {
                first_opener.get_or_insert(i);
                openers.set(d.marker, i);
            }
        }
        None
    }

    /// A slot the scan just reported as holding a delimiter.
    fn live(&self, idx: usize) -> Delimiter {
        match self.slots.get(idx) {
            Some(Some(d)) => *d,
            _ => panic!("emphasis match references empty delimiter slot {idx}"),
        }
    }
}
