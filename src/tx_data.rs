use alloy::rpc::types::TransactionRequest;

use crate::decode::DecodedTransaction;

impl From<DecodedTransaction> for TransactionRequest {
    fn from(tx: DecodedTransaction) -> Self {
        TransactionRequest::default()
            .to(tx.to)
            .input(tx.data.into())
            .value(tx.value)
    }
}
