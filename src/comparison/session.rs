//! Comparison view lifecycle around the pure engine
//!
//! Mirrors the flow of the surrounding application's comparison view:
//! certificates are toggled in and out of the selection, the view opens once
//! enough are chosen, and winning values are recomputed in full on every
//! change while it is open. Closing the view discards the winning values.

use super::engine::{compare, Selection};
use super::metrics::WinningValues;
use crate::catalog::Certificate;
use crate::error::EngineError;

/// Stateful wrapper owning the current selection and its winning values.
///
/// All computation delegates to the pure [`compare`]; this type only tracks
/// when the results are live and when they must be discarded.
#[derive(Debug, Clone, Default)]
pub struct CompareSession {
    target_principal: f64,
    selection: Selection,
    winning: WinningValues,
    open: bool,
}

impl CompareSession {
    /// Create a session for a target principal (the user's savings goal)
    pub fn new(target_principal: f64) -> Self {
        CompareSession {
            target_principal,
            ..Default::default()
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn winning_values(&self) -> &WinningValues {
        &self.winning
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn target_principal(&self) -> f64 {
        self.target_principal
    }

    /// Change the target principal, recomputing if the view is open
    pub fn set_target_principal(&mut self, target_principal: f64) -> Result<(), EngineError> {
        self.target_principal = target_principal;
        self.recompute()
    }

    /// Toggle a certificate in or out of the selection; recomputes winning
    /// values when the view is open. Returns whether the certificate is now
    /// selected.
    pub fn toggle(&mut self, bank: &str, certificate: &Certificate) -> Result<bool, EngineError> {
        let selected = self.selection.toggle(bank, certificate);
        self.recompute()?;
        Ok(selected)
    }

    /// Open the comparison view and compute winning values fresh.
    ///
    /// Opening with fewer than [`MIN_COMPARABLE`](super::MIN_COMPARABLE)
    /// selections is allowed and yields an open view with no winners.
    pub fn open(&mut self) -> Result<(), EngineError> {
        self.open = true;
        self.recompute()
    }

    /// Close the view and discard the winning values
    pub fn close(&mut self) {
        self.open = false;
        self.winning = WinningValues::default();
    }

    /// Remove a certificate from an open comparison; the view closes when
    /// the last entry is removed.
    pub fn remove(&mut self, bank: &str, certificate: &Certificate) -> Result<(), EngineError> {
        self.selection.deselect(bank, certificate);
        if self.selection.is_empty() {
            self.close();
            return Ok(());
        }
        self.recompute()
    }

    pub fn is_winning(&self, key: &str, value: f64) -> bool {
        self.winning.is_winning(key, value)
    }

    pub fn is_winning_text(&self, key: &str, value: &str) -> bool {
        self.winning.is_winning_text(key, value)
    }

    fn recompute(&mut self) -> Result<(), EngineError> {
        self.winning = if self.open {
            compare(&self.selection, self.target_principal)?
        } else {
            WinningValues::default()
        };
        log::debug!(
            "recomputed {} winning values over {} selections",
            self.winning.len(),
            self.selection.len()
        );
        Ok(())
    }
}
