//! Transaction and block gas accounting
//!
//! A transaction buys VM gas with the native asset it leaves as fee, gets a
//! fixed credit on top, and finally pays for its own size in storage gas.

use crate::consensus::ValidationError;
use crate::constants::{DEFAULT_GAS_CREDIT, MAX_BLOCK_GAS, MAX_GAS_AMOUNT, STORAGE_GAS_RATE, VM_GAS_RATE};

/// Gas state of one transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasState {
    /// Native asset committed to gas
    pub native_value: u64,
    pub gas_left: i64,
    pub gas_used: i64,
    pub storage_gas: i64,
    /// Set once storage gas has been charged
    pub gas_valid: bool,
}

impl GasState {
    /// Initialise gas for a transaction spending `native_value` on fees
    pub fn new(native_value: i64, tx_size: i64) -> Result<Self, ValidationError> {
        if native_value < 0 || tx_size < 0 {
            return Err(ValidationError::GasCalculation);
        }

        let bought = (native_value / VM_GAS_RATE).min(MAX_GAS_AMOUNT);
        let gas_left = bought
            .checked_add(DEFAULT_GAS_CREDIT)
            .ok_or(ValidationError::GasCalculation)?;
        let storage_gas = tx_size
            .checked_mul(STORAGE_GAS_RATE)
            .ok_or(ValidationError::GasCalculation)?;

        Ok(Self {
            native_value: native_value as u64,
            gas_left,
            gas_used: 0,
            storage_gas,
            gas_valid: false,
        })
    }

    /// Record VM execution that left `gas_left` remaining
    pub fn update_usage(&mut self, gas_left: i64) -> Result<(), ValidationError> {
        if gas_left < 0 || gas_left > self.gas_left {
            return Err(ValidationError::GasCalculation);
        }
        self.gas_used = self
            .gas_used
            .checked_add(self.gas_left - gas_left)
            .ok_or(ValidationError::GasCalculation)?;
        self.gas_left = gas_left;
        Ok(())
    }

    /// Deduct storage gas and mark the transaction's gas as settled
    pub fn charge_storage(&mut self) -> Result<(), ValidationError> {
        let left = self
            .gas_left
            .checked_sub(self.storage_gas)
            .filter(|left| *left >= 0)
            .ok_or(ValidationError::GasCalculation)?;
        self.gas_used = self
            .gas_used
            .checked_add(self.storage_gas)
            .ok_or(ValidationError::GasCalculation)?;
        self.gas_left = left;
        self.gas_valid = true;
        Ok(())
    }
}

/// Running gas total of a block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockGasMeter {
    used: u64,
}

impl BlockGasMeter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one transaction's gas, rejecting the block once it exceeds `MAX_BLOCK_GAS`
    pub fn add(&mut self, gas_used: u64) -> Result<(), ValidationError> {
        let used = self
            .used
            .checked_add(gas_used)
            .ok_or(ValidationError::GasCalculation)?;
        if used > MAX_BLOCK_GAS {
            return Err(ValidationError::BlockGasExceeded {
                used,
                limit: MAX_BLOCK_GAS,
            });
        }
        self.used = used;
        Ok(())
    }

    pub fn used(&self) -> u64 {
        self.used
    }
}
