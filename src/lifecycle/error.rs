//! Error type for the order pipeline.

use crate::factory::OrderError;
use crate::notify::NotifyError;
use crate::store::StoreError;
use thiserror::Error;

/// Any failure while taking or placing an order.
#[derive(Debug, Error)]
pub enum KitchenError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Notify(#[from] NotifyError),
}
