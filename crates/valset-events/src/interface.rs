// crates/valset-events/src/interface.rs
//
// Contract event interfaces: which events a contract declares and how to
// turn a receipt's logs back into argument lists.
//
// Events are described with `alloy_json_abi::Event`, either built in code
// or read from a JSON ABI, and decoded at runtime through `alloy_dyn_abi`.
// Arguments come back in declaration order regardless of which ones were
// indexed. An indexed dynamic argument decodes to its 32-byte topic hash.

use alloy_dyn_abi::{DynSolType, DynSolValue, EventExt, Specifier};
use alloy_json_abi::{Event, EventParam, JsonAbi};
use alloy_primitives::{Address, Bytes, Log};

use valset_core::error::ValsetError;

use crate::receipt::TransactionReceipt;
use crate::value::render;

/// Declare an event from its name and ordered parameters.
pub fn event(name: &str, inputs: Vec<EventParam>) -> Event {
    Event {
        name: name.to_string(),
        inputs,
        anonymous: false,
    }
}

/// A parameter carried in the log data.
pub fn param(name: &str, ty: &str) -> EventParam {
    EventParam {
        ty: ty.to_string(),
        name: name.to_string(),
        indexed: false,
        components: Vec::new(),
        internal_type: None,
    }
}

/// A parameter carried in a topic.
pub fn indexed_param(name: &str, ty: &str) -> EventParam {
    EventParam {
        indexed: true,
        ..param(name, ty)
    }
}

/// Number of topics a log of `event` carries, selector included.
fn topic_count(event: &Event) -> usize {
    1 + event.inputs.iter().filter(|p| p.indexed).count()
}

fn decode_args(event: &Event, log: &Log) -> Result<Vec<DynSolValue>, ValsetError> {
    let decoded = event
        .decode_log(&log.data, true)
        .map_err(|e| ValsetError::Decode(format!("{}: {}", event.name, e)))?;

    let mut indexed = decoded.indexed.into_iter();
    let mut body = decoded.body.into_iter();
    event
        .inputs
        .iter()
        .map(|param| {
            let value = if param.indexed {
                indexed.next()
            } else {
                body.next()
            };
            value.ok_or_else(|| {
                ValsetError::Decode(format!("{}: missing value for {}", event.name, param.name))
            })
        })
        .collect()
}

fn encode_args(event: &Event, emitter: Address, args: &[DynSolValue]) -> Result<Log, ValsetError> {
    if args.len() != event.inputs.len() {
        return Err(ValsetError::Encode(format!(
            "{}: expected {} arguments, got {}",
            event.name,
            event.inputs.len(),
            args.len()
        )));
    }

    let mut topics = vec![event.selector()];
    let mut body = Vec::new();
    for (param, value) in event.inputs.iter().zip(args) {
        let ty: DynSolType = param
            .resolve()
            .map_err(|e| ValsetError::Encode(format!("{}: {}", event.name, e)))?;
        if !ty.matches(value) {
            return Err(ValsetError::Encode(format!(
                "{}: {} does not fit {} {}",
                event.name,
                render(value),
                param.ty,
                param.name
            )));
        }
        if param.indexed {
            let topic = value.as_word().ok_or_else(|| {
                ValsetError::Encode(format!(
                    "{}: indexed {} {} is not a single word",
                    event.name, param.ty, param.name
                ))
            })?;
            topics.push(topic);
        } else {
            body.push(value.clone());
        }
    }

    let data = DynSolValue::Tuple(body).abi_encode_params();
    Log::new(emitter, topics, Bytes::from(data))
        .ok_or_else(|| ValsetError::Encode(format!("{}: more than four topics", event.name)))
}

/// An event emitted in a receipt, decoded against its interface.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedEvent {
    pub name: String,
    pub address: Address,
    pub args: Vec<DynSolValue>,
}

impl DecodedEvent {
    /// The argument at `position`, if present.
    pub fn arg(&self, position: usize) -> Option<&DynSolValue> {
        self.args.get(position)
    }
}

/// Decoding capability for one contract's events.
///
/// Implemented by `AbiEventInterface`; the assertion harness only depends
/// on this trait, so any emitting contract can be checked.
pub trait EventInterface: Send + Sync {
    /// Human-readable contract name, used in log output.
    fn contract_name(&self) -> &str;

    /// Decode every occurrence of `event` in `receipt`, in emission order.
    fn decode_logs(
        &self,
        receipt: &TransactionReceipt,
        event: &str,
    ) -> Result<Vec<DecodedEvent>, ValsetError>;
}

/// Event interface described by a list of ABI events.
///
/// When bound to an address with `at`, only logs emitted by that address
/// are considered part of the interface.
#[derive(Debug, Clone)]
pub struct AbiEventInterface {
    contract_name: String,
    address: Option<Address>,
    events: Vec<Event>,
}

impl AbiEventInterface {
    pub fn new(contract_name: &str, events: Vec<Event>) -> Self {
        Self {
            contract_name: contract_name.to_string(),
            address: None,
            events,
        }
    }

    /// Build an interface from the events of a JSON ABI, such as the `abi`
    /// array of a compiled contract artifact.
    pub fn from_json_abi(contract_name: &str, json: &str) -> Result<Self, ValsetError> {
        let abi: JsonAbi = serde_json::from_str(json)
            .map_err(|e| ValsetError::Decode(format!("{} ABI: {}", contract_name, e)))?;
        Ok(Self::new(contract_name, abi.events().cloned().collect()))
    }

    /// Restrict the interface to logs emitted by `address`.
    pub fn at(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Look up an event declaration by name.
    pub fn event(&self, name: &str) -> Result<&Event, ValsetError> {
        self.events
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| {
                ValsetError::UnknownEvent(format!("{} on {}", name, self.contract_name))
            })
    }

    /// Build the log `emitter` would produce when emitting `event` with `args`.
    pub fn encode_log(
        &self,
        emitter: Address,
        event: &str,
        args: &[DynSolValue],
    ) -> Result<Log, ValsetError> {
        encode_args(self.event(event)?, emitter, args)
    }

    fn owns(&self, log: &Log) -> bool {
        self.address.map_or(true, |address| log.address == address)
    }
}

impl EventInterface for AbiEventInterface {
    fn contract_name(&self) -> &str {
        &self.contract_name
    }

    fn decode_logs(
        &self,
        receipt: &TransactionReceipt,
        event: &str,
    ) -> Result<Vec<DecodedEvent>, ValsetError> {
        let abi = self.event(event)?;
        let selector = abi.selector();
        let expected_topics = topic_count(abi);

        let mut decoded = Vec::new();
        for log in receipt.logs() {
            if log.topics().first() != Some(&selector) || !self.owns(log) {
                continue;
            }
            // Same signature, different indexing, e.g. ERC-20 vs ERC-721 Transfer.
            if log.topics().len() != expected_topics {
                tracing::trace!(
                    "Skipping {} log from {} with {} topic(s), expected {}",
                    event,
                    log.address,
                    log.topics().len(),
                    expected_topics
                );
                continue;
            }
            decoded.push(DecodedEvent {
                name: abi.name.clone(),
                address: log.address,
                args: decode_args(abi, log)?,
            });
        }

        tracing::trace!(
            "Decoded {} {} log(s) from {} in tx {}",
            decoded.len(),
            event,
            self.contract_name,
            receipt.transaction_hash
        );
        Ok(decoded)
    }
}
