//! Tests for fetching contract interfaces from a local JSON-RPC node.

use mancala_starknet::{
    ACCOUNT_ADDRESS, ChainError, Contract, Felt, PRIVATE_KEY, PROVIDER_URL, provider,
    validate_starknet_config,
};
use mcore::Settings;
use parking_lot::Mutex;
use serde_json::{Value, json};
use starknet::{
    core::types::StarknetError,
    providers::{Provider, ProviderError},
};
use std::sync::Arc;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
};

const MANCALA_ABI: &str = include_str!("fixtures/mancala_abi.json");

/// Answers JSON-RPC calls by method name and logs every request.
struct Node {
    url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl Node {
    async fn start(answers: Vec<(&'static str, Value)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/rpc", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = requests.clone();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let Some(request) = read_body(&mut socket).await else {
                    continue;
                };
                log.lock().push(request.clone());
                let method = request["method"].as_str().unwrap_or_default();
                let mut reply = answers
                    .iter()
                    .find(|(m, _)| *m == method)
                    .map(|(_, reply)| reply.clone())
                    .unwrap_or_else(|| {
                        json!({ "error": { "code": -32601, "message": "Method not found" } })
                    });
                reply["jsonrpc"] = json!("2.0");
                reply["id"] = request["id"].clone();
                let body = reply.to_string();
                let response = format!(
                    "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
            }
        });
        Self { url, requests }
    }

    fn methods(&self) -> Vec<String> {
        self.requests
            .lock()
            .iter()
            .map(|r| r["method"].as_str().unwrap_or_default().to_owned())
            .collect()
    }
}

async fn read_body(socket: &mut TcpStream) -> Option<Value> {
    let mut raw = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let n = socket.read(&mut buf).await.ok()?;
        if n == 0 {
            return None;
        }
        raw.extend_from_slice(&buf[..n]);
        let text = String::from_utf8_lossy(&raw).to_string();
        let Some(end) = text.find("\r\n\r\n") else {
            continue;
        };
        let length = text[..end]
            .lines()
            .find_map(|l| {
                let (name, value) = l.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())?
            })
            .unwrap_or(0);
        if raw.len() >= end + 4 + length {
            return serde_json::from_slice(&raw[end + 4..end + 4 + length]).ok();
        }
    }
}

fn sierra(abi: &str) -> Value {
    json!({ "result": {
        "sierra_program": [],
        "contract_class_version": "0.1.0",
        "entry_points_by_type": { "CONSTRUCTOR": [], "EXTERNAL": [], "L1_HANDLER": [] },
        "abi": abi,
    }})
}

async fn fetch(node: &Node) -> Result<Contract, ChainError> {
    let settings = Settings::isolated()
        .secret(ACCOUNT_ADDRESS, "0x0123")
        .secret(PRIVATE_KEY, "0x0abc")
        .value(PROVIDER_URL, node.url.as_str());
    let config = validate_starknet_config(&settings).unwrap();
    Contract::fetch(&provider(&config), Felt::from(0x5eed_u64)).await
}

#[tokio::test]
async fn fetches_sierra_interface() {
    let node = Node::start(vec![("starknet_getClassAt", sierra(MANCALA_ABI))]).await;

    let contract = fetch(&node).await.unwrap();
    assert_eq!(contract.address(), Felt::from(0x5eed_u64));
    assert!(contract.abi().function("move").is_some());
    assert_eq!(node.methods(), ["starknet_getClassAt"]);
    let params = node.requests.lock()[0]["params"].to_string();
    assert!(params.contains("0x5eed"));
}

#[tokio::test]
async fn empty_sierra_abi_is_not_found() {
    let node = Node::start(vec![("starknet_getClassAt", sierra(""))]).await;

    let err = fetch(&node).await.unwrap_err();
    assert!(matches!(err, ChainError::Interface(_)));
    assert_eq!(err.to_string(), "Contract ABI not found");
}

#[tokio::test]
async fn legacy_class_without_abi_is_not_found() {
    let legacy = json!({ "result": {
        "program": "",
        "entry_points_by_type": { "CONSTRUCTOR": [], "EXTERNAL": [], "L1_HANDLER": [] },
    }});
    let node = Node::start(vec![("starknet_getClassAt", legacy)]).await;

    let err = fetch(&node).await.unwrap_err();
    assert_eq!(err.to_string(), "Contract ABI not found");
}

#[tokio::test]
async fn provider_errors_pass_through() {
    let missing = json!({ "error": { "code": 20, "message": "Contract not found" } });
    let node = Node::start(vec![("starknet_getClassAt", missing)]).await;

    let err = fetch(&node).await.unwrap_err();
    assert!(matches!(
        err,
        ChainError::Provider(ProviderError::StarknetError(
            StarknetError::ContractNotFound
        ))
    ));

    let direct = ProviderError::StarknetError(StarknetError::ContractNotFound);
    assert_eq!(err.to_string(), direct.to_string());
}

#[tokio::test]
async fn chain_id_comes_from_the_node() {
    let node = Node::start(vec![("starknet_chainId", json!({ "result": "0x534e5f5345504f4c4941" }))])
        .await;
    let settings = Settings::isolated()
        .secret(ACCOUNT_ADDRESS, "0x0123")
        .secret(PRIVATE_KEY, "0x0abc")
        .value(PROVIDER_URL, node.url.as_str());
    let config = validate_starknet_config(&settings).unwrap();

    let chain_id = provider(&config).chain_id().await.unwrap();
    assert_eq!(chain_id, Felt::from_hex_unchecked("0x534e5f5345504f4c4941"));
}
