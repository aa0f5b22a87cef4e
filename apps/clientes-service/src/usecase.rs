//! # ユースケース層
//!
//! ハンドラから呼ばれるアプリケーションロジックを定義する。
//! 書き込み（command）と読み取り（query）をユースケース単位で分ける。

pub mod cliente;

pub use cliente::{
    ClienteDto,
    command::{CreateClienteInput, CreateClienteUseCase},
    query::GetClienteByIdUseCase,
};
