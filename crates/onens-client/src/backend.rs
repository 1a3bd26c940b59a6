//! # Ledger Backend
//!
//! The boundary between the contract wrappers and the chain. Wrappers
//! speak [`LedgerBackend`]; the engine crate never sees it at all.
//!
//! [`HttpLedgerBackend`] is the production implementation: JSON-RPC over
//! HTTP with a per-request timeout. Trait methods are synchronous and
//! bridge onto the ambient Tokio runtime internally; callers inside an
//! async context should wrap them in `tokio::task::spawn_blocking`.
//!
//! [`StaticLedgerBackend`] serves tests: canned call responses keyed by
//! exact call data, plus a log of submitted transactions.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::config::LedgerConfig;
use crate::error::LedgerError;
use crate::types::Address;

/// A state-changing contract call, signed by the node on behalf of `from`.
#[derive(Debug, Clone)]
pub struct TransactionRequest {
    /// Sender address; its key is managed by the RPC endpoint.
    pub from: Address,
    /// Target contract.
    pub to: Address,
    /// ABI-encoded call data.
    pub data: Vec<u8>,
    /// Value in wei to send with the call, for payable functions.
    pub value: Option<u128>,
}

/// Transport capability the contract wrappers are written against.
pub trait LedgerBackend: Send + Sync {
    /// Execute a read-only contract call and return the raw return data.
    fn call(&self, to: Address, data: &[u8]) -> Result<Vec<u8>, LedgerError>;

    /// Submit a state-changing call; returns the transaction hash.
    fn send_transaction(&self, tx: &TransactionRequest) -> Result<String, LedgerError>;

    /// The chain this backend is connected to.
    fn chain_id(&self) -> u64;
}

/// JSON-RPC backend over HTTP.
#[derive(Debug)]
pub struct HttpLedgerBackend {
    client: reqwest::Client,
    rpc_url: String,
    chain_id: u64,
}

impl HttpLedgerBackend {
    /// Build a backend from configuration.
    ///
    /// Validates the endpoint URL and constructs the HTTP client with the
    /// configured per-request timeout.
    pub fn new(config: &LedgerConfig) -> Result<Self, LedgerError> {
        let url = url::Url::parse(&config.rpc_url)
            .map_err(|e| LedgerError::Config(format!("invalid RPC URL {:?}: {e}", config.rpc_url)))?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LedgerError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            rpc_url: url.to_string(),
            chain_id: config.chain_id,
        })
    }

    /// Send a JSON-RPC request and return the `result` field.
    fn rpc_call(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, LedgerError> {
        let rt = tokio::runtime::Handle::try_current().map_err(|_| LedgerError::NoRuntime)?;

        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": 1
        });

        tracing::debug!(method, endpoint = %self.rpc_url, "ledger RPC call");

        rt.block_on(async {
            let resp = self
                .client
                .post(&self.rpc_url)
                .json(&body)
                .send()
                .await
                .map_err(|e| LedgerError::Transport {
                    endpoint: self.rpc_url.clone(),
                    source: e,
                })?;

            if !resp.status().is_success() {
                let status = resp.status().as_u16();
                let body = resp.text().await.unwrap_or_default();
                return Err(LedgerError::Http {
                    endpoint: self.rpc_url.clone(),
                    status,
                    body,
                });
            }

            let json: serde_json::Value =
                resp.json().await.map_err(|e| LedgerError::Transport {
                    endpoint: self.rpc_url.clone(),
                    source: e,
                })?;

            if let Some(error) = json.get("error") {
                let message = error
                    .get("message")
                    .and_then(|m| m.as_str())
                    .unwrap_or("unknown RPC error")
                    .to_string();
                if message.contains("revert") {
                    return Err(LedgerError::Reverted { message });
                }
                return Err(LedgerError::Api {
                    method: method.to_string(),
                    message,
                });
            }

            json.get("result")
                .cloned()
                .ok_or_else(|| LedgerError::Api {
                    method: method.to_string(),
                    message: "response missing 'result' field".to_string(),
                })
        })
    }

    fn result_hex(value: serde_json::Value, what: &'static str) -> Result<Vec<u8>, LedgerError> {
        let text = value.as_str().ok_or_else(|| LedgerError::Decode {
            what,
            reason: "non-string result".to_string(),
        })?;
        hex::decode(text.trim_start_matches("0x")).map_err(|e| LedgerError::Decode {
            what,
            reason: e.to_string(),
        })
    }
}

impl LedgerBackend for HttpLedgerBackend {
    fn call(&self, to: Address, data: &[u8]) -> Result<Vec<u8>, LedgerError> {
        let call = serde_json::json!({
            "to": to.to_hex(),
            "data": format!("0x{}", hex::encode(data)),
        });
        let result = self.rpc_call("eth_call", serde_json::json!([call, "latest"]))?;
        Self::result_hex(result, "call return data")
    }

    fn send_transaction(&self, tx: &TransactionRequest) -> Result<String, LedgerError> {
        let mut call = serde_json::json!({
            "from": tx.from.to_hex(),
            "to": tx.to.to_hex(),
            "data": format!("0x{}", hex::encode(&tx.data)),
        });
        if let Some(value) = tx.value {
            call["value"] = serde_json::json!(format!("0x{value:x}"));
        }
        let result = self.rpc_call("eth_sendTransaction", serde_json::json!([call]))?;
        result
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| LedgerError::Decode {
                what: "transaction hash",
                reason: "non-string result".to_string(),
            })
    }

    fn chain_id(&self) -> u64 {
        self.chain_id
    }
}

/// Canned-response backend for exercising wrapper marshalling in tests.
///
/// `call` answers are keyed by exact `(to, data)` pairs, so a test fails
/// loudly when a wrapper encodes anything other than the staged call.
/// Submitted transactions are recorded and answered with a deterministic
/// pseudo-hash.
#[derive(Debug, Default)]
pub struct StaticLedgerBackend {
    responses: HashMap<(Address, Vec<u8>), Result<Vec<u8>, String>>,
    sent: Mutex<Vec<TransactionRequest>>,
    chain_id: u64,
}

impl StaticLedgerBackend {
    /// An empty backend on chain id 1.
    pub fn new() -> Self {
        Self {
            chain_id: 1,
            ..Self::default()
        }
    }

    /// Stage a successful `call` response.
    pub fn with_response(mut self, to: Address, data: Vec<u8>, result: Vec<u8>) -> Self {
        self.responses.insert((to, data), Ok(result));
        self
    }

    /// Stage a revert for a `call`.
    pub fn with_revert(mut self, to: Address, data: Vec<u8>, message: &str) -> Self {
        self.responses.insert((to, data), Err(message.to_string()));
        self
    }

    /// Transactions submitted so far, in order.
    pub fn sent(&self) -> Vec<TransactionRequest> {
        self.sent.lock().expect("sent log poisoned").clone()
    }
}

impl LedgerBackend for StaticLedgerBackend {
    fn call(&self, to: Address, data: &[u8]) -> Result<Vec<u8>, LedgerError> {
        match self.responses.get(&(to, data.to_vec())) {
            Some(Ok(result)) => Ok(result.clone()),
            Some(Err(message)) => Err(LedgerError::Reverted {
                message: message.clone(),
            }),
            None => Err(LedgerError::Api {
                method: "eth_call".to_string(),
                message: format!(
                    "no staged response for {} with data 0x{}",
                    to,
                    hex::encode(data)
                ),
            }),
        }
    }

    fn send_transaction(&self, tx: &TransactionRequest) -> Result<String, LedgerError> {
        let mut sent = self.sent.lock().expect("sent log poisoned");
        sent.push(tx.clone());
        Ok(format!("0x{:064x}", sent.len()))
    }

    fn chain_id(&self) -> u64 {
        self.chain_id
    }
}
