//! Hand-off between decoded invocation parameters and an execution engine.
//!
//! The engine itself lives elsewhere. This module only fixes the shape of
//! what goes in ([`InvokeParamRef`]) and what comes back ([`PreExecResult`]).

use serde::{Deserialize, Serialize};
use tracing::debug;

use invoke_io::ZeroCopyError;

use crate::codec::ZeroCopyCodec;
use crate::invoke_param::InvokeParamRef;

/// Outcome byte of a pre-execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum ExecState {
    #[default]
    Fail = 0,
    Success = 1,
}

impl From<ExecState> for u8 {
    fn from(state: ExecState) -> Self {
        state as u8
    }
}

impl TryFrom<u8> for ExecState {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Fail),
            1 => Ok(Self::Success),
            other => Err(format!("invalid exec state {other}")),
        }
    }
}

/// Result of running an invocation without committing it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PreExecResult {
    /// Whether execution completed.
    pub state: ExecState,

    /// Gas consumed by the execution.
    pub gas: u64,

    /// Untyped value returned by the contract.
    pub result: serde_json::Value,
}

impl PreExecResult {
    pub fn success(gas: u64, result: serde_json::Value) -> Self {
        Self {
            state: ExecState::Success,
            gas,
            result,
        }
    }

    pub fn fail(gas: u64) -> Self {
        Self {
            state: ExecState::Fail,
            gas,
            result: serde_json::Value::Null,
        }
    }

    pub fn is_success(&self) -> bool {
        self.state == ExecState::Success
    }
}

/// An engine that can dry-run an invocation.
pub trait PreExecutor {
    fn pre_execute(&self, param: &InvokeParamRef<'_>) -> PreExecResult;
}

/// Decodes `bytes` in place and hands the view to `executor`.
///
/// Malformed or truncated input never reaches the executor.
pub fn pre_execute_bytes<E: PreExecutor + ?Sized>(
    executor: &E,
    codec: &ZeroCopyCodec,
    bytes: &[u8],
) -> Result<PreExecResult, ZeroCopyError> {
    let param = codec.decode_view(bytes).into_result()?;
    let result = executor.pre_execute(&param);
    debug!(
        method = %param.method_str(),
        state = ?result.state,
        gas = result.gas,
        "pre-executed invoke param"
    );
    Ok(result)
}
