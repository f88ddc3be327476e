//! "All accounts" mode: the same request, once per configured credential.

use tracing::info;
use tweethub_config::Account;

use crate::executor::{Executor, SurfaceFactory};
use crate::request::{ActionOutcome, ActionRequest};

/// Run `request` once per account, strictly sequentially and in list order.
///
/// Each iteration gets its own session (opened and released inside
/// [`Executor::run`]), and a failing account never stops the ones after it.
/// Identity is passed by parameter; there is no shared mutable "active
/// account" anywhere.
pub async fn run_for_accounts<F: SurfaceFactory>(
    executor: &Executor<'_, F>,
    accounts: &[Account],
    request: &ActionRequest,
) -> Vec<(Account, ActionOutcome)> {
    let mut outcomes = Vec::with_capacity(accounts.len());

    for (index, account) in accounts.iter().enumerate() {
        info!(
            username = %account.username,
            position = index + 1,
            total = accounts.len(),
            kind = %request.kind,
            "running action for account"
        );
        let outcome = executor.run(account, request).await;
        info!(
            username = %account.username,
            ok = outcome.ok,
            detail = %outcome.detail,
            "account finished"
        );
        outcomes.push((account.clone(), outcome));
    }

    outcomes
}
