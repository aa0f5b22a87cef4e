//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! - 各ハンドラはサブモジュールに配置し、ここで re-export する
//! - ハンドラは薄く保ち、ビジネスロジックはユースケースに委譲する

pub mod cliente;
pub mod health;

pub use cliente::{ClienteState, CreateClienteRequest, create_cliente, get_cliente};
pub use health::health_check;
