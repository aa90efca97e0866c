//! Demo catalog installed on first run against an empty store.
//!
//! Kept in the persisted document shape and decoded through the same serde
//! path as real snapshots. Two of the products carry starting stock with no
//! matching movement; rehydration accepts that, movements only explain stock
//! from creation onward.

use estoque_ledger::Ledger;

const SAMPLE_PRODUCTS: &str = r#"[
  {"id":1,"name":"Smartphone Samsung Galaxy","category":"Eletrônicos","quantity":25,"price":1299.99,"minStock":10,"createdAt":"2024-01-15T00:00:00Z"},
  {"id":2,"name":"Camiseta Polo","category":"Roupas","quantity":50,"price":89.90,"minStock":15,"createdAt":"2024-01-20T00:00:00Z"},
  {"id":3,"name":"Cafeteira Elétrica","category":"Casa","quantity":8,"price":299.99,"minStock":10,"createdAt":"2024-02-01T00:00:00Z"},
  {"id":4,"name":"Tênis de Corrida","category":"Esportes","quantity":30,"price":259.90,"minStock":12,"createdAt":"2024-02-10T00:00:00Z"}
]"#;

const SAMPLE_MOVEMENTS: &str = r#"[
  {"id":1,"productId":1,"type":"entrada","quantity":30,"reason":"Compra inicial","date":"2024-01-15T00:00:00Z","value":38999.70},
  {"id":2,"productId":1,"type":"saida","quantity":5,"reason":"Venda","date":"2024-02-01T00:00:00Z","value":6499.95},
  {"id":3,"productId":2,"type":"entrada","quantity":60,"reason":"Reposição de estoque","date":"2024-01-20T00:00:00Z","value":5394.00},
  {"id":4,"productId":2,"type":"saida","quantity":10,"reason":"Venda","date":"2024-02-15T00:00:00Z","value":899.00}
]"#;

/// Build the demo ledger.
pub fn sample_ledger() -> Ledger {
    let products = serde_json::from_str(SAMPLE_PRODUCTS).expect("sample products are valid");
    let movements = serde_json::from_str(SAMPLE_MOVEMENTS).expect("sample movements are valid");
    Ledger::from_parts(products, movements)
}
