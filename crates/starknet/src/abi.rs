//! Contract interfaces and calldata encoding.
//!
//! Both Sierra (Cairo 1) and legacy (Cairo 0) ABIs are JSON arrays of
//! entries tagged by `type`. Only `function` entries matter here; Sierra
//! nests them under `interface` entries as `items`.

use crate::ChainError;
use serde::Deserialize;
use serde_json::Value;
use starknet::core::{
    types::{ContractClass, Felt},
    utils::cairo_short_string_to_felt,
};

/// A parsed contract interface.
#[derive(Debug, Clone, Default)]
pub struct Abi {
    functions: Vec<Function>,
}

/// A callable entry point.
#[derive(Debug, Clone, Deserialize)]
pub struct Function {
    /// Entry point name.
    pub name: String,
    /// Declared inputs, in order.
    #[serde(default)]
    pub inputs: Vec<Param>,
    /// `external` or `view` (Sierra only).
    #[serde(default)]
    pub state_mutability: Option<String>,
}

/// A declared function input.
#[derive(Debug, Clone, Deserialize)]
pub struct Param {
    /// Argument name.
    pub name: String,
    /// Cairo type path, e.g. `core::felt252`.
    #[serde(rename = "type")]
    pub ty: String,
}

impl Abi {
    /// Parse ABI entries from a JSON value (an array of entries).
    pub fn from_value(value: &Value) -> Result<Self, ChainError> {
        let entries = value
            .as_array()
            .ok_or_else(|| ChainError::Interface("Contract ABI is not a list of entries".into()))?;
        let mut functions = Vec::new();
        collect(entries, &mut functions)?;
        Ok(Self { functions })
    }

    /// Parse a Sierra ABI string.
    pub fn from_json(json: &str) -> Result<Self, ChainError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| ChainError::Interface(format!("invalid contract ABI: {e}")))?;
        Self::from_value(&value)
    }

    /// Extract the ABI of a deployed class.
    pub fn from_class(class: &ContractClass) -> Result<Self, ChainError> {
        match class {
            ContractClass::Sierra(sierra) if !sierra.abi.trim().is_empty() => {
                Self::from_json(&sierra.abi)
            }
            ContractClass::Legacy(legacy) => match &legacy.abi {
                Some(entries) => {
                    let value = serde_json::to_value(entries)
                        .map_err(|e| ChainError::Interface(format!("invalid contract ABI: {e}")))?;
                    Self::from_value(&value)
                }
                None => Ok(Self::default()),
            },
            _ => Ok(Self::default()),
        }
    }

    /// Look up a function by name.
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// All functions, in declaration order.
    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    /// Whether the interface declares no functions.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

fn collect(entries: &[Value], functions: &mut Vec<Function>) -> Result<(), ChainError> {
    for entry in entries {
        match entry.get("type").and_then(Value::as_str) {
            Some("function") => {
                let function = Function::deserialize(entry).map_err(|e| {
                    ChainError::Interface(format!("invalid function entry in contract ABI: {e}"))
                })?;
                functions.push(function);
            }
            Some("interface") => {
                if let Some(items) = entry.get("items").and_then(Value::as_array) {
                    collect(items, functions)?;
                }
            }
            _ => {}
        }
    }
    Ok(())
}

impl Function {
    /// Encode positional arguments into calldata.
    pub fn encode(&self, args: &[Value]) -> Result<Vec<Felt>, ChainError> {
        if args.len() != self.inputs.len() {
            return Err(ChainError::Encode(format!(
                "{} expects {} arguments, got {}",
                self.name,
                self.inputs.len(),
                args.len()
            )));
        }

        let mut calldata = Vec::with_capacity(args.len());
        for (param, arg) in self.inputs.iter().zip(args) {
            param.encode(arg, &mut calldata)?;
        }
        Ok(calldata)
    }
}

impl Param {
    fn encode(&self, arg: &Value, out: &mut Vec<Felt>) -> Result<(), ChainError> {
        let ty = self.ty.rsplit("::").next().unwrap_or(&self.ty);
        match ty {
            "u256" => {
                let bytes = self.felt(arg)?.to_bytes_be();
                out.push(Felt::from_bytes_be_slice(&bytes[16..]));
                out.push(Felt::from_bytes_be_slice(&bytes[..16]));
            }
            "felt252" | "felt" | "ContractAddress" | "ClassHash" | "EthAddress" | "bool"
            | "u8" | "u16" | "u32" | "u64" | "u128" | "usize" | "i8" | "i16" | "i32" | "i64"
            | "i128" => out.push(self.felt(arg)?),
            _ => {
                return Err(ChainError::Encode(format!(
                    "unsupported type `{}` for argument `{}`",
                    self.ty, self.name
                )));
            }
        }
        Ok(())
    }

    fn felt(&self, arg: &Value) -> Result<Felt, ChainError> {
        let invalid = || {
            ChainError::Encode(format!(
                "argument `{}` cannot be encoded as {}: {arg}",
                self.name, self.ty
            ))
        };

        match arg {
            Value::Bool(b) => Ok(Felt::from(u64::from(*b))),
            Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Ok(Felt::from(u))
                } else if let Some(i) = n.as_i64() {
                    Ok(Felt::ZERO - Felt::from(i.unsigned_abs()))
                } else {
                    match n.as_f64() {
                        Some(f) if f.fract() == 0.0 && f >= 0.0 && f <= u64::MAX as f64 => {
                            Ok(Felt::from(f as u64))
                        }
                        _ => Err(invalid()),
                    }
                }
            }
            Value::String(s) => {
                let s = s.trim();
                if s.starts_with("0x") || s.starts_with("0X") {
                    Felt::from_hex(s).map_err(|_| invalid())
                } else if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
                    Felt::from_dec_str(s).map_err(|_| invalid())
                } else {
                    cairo_short_string_to_felt(s).map_err(|_| invalid())
                }
            }
            _ => Err(invalid()),
        }
    }
}
