use super::ContractHandle;
use crate::call::{CallArg, CallValue, ShapeError};
use crate::transport::ContractTransport;
use rwa_profit_domain::entities::{Distribution, TxReceipt};
use rwa_profit_domain::enums::ContractKind;
use rwa_profit_domain::validation::{require_address, require_positive_amount};
use rwa_profit_domain::{Result, ScaledAmount, SnapshotId};
use std::sync::Arc;

/// Adapter for the distributor holding per-snapshot claim accounting.
#[derive(Clone)]
pub struct DistributorContract {
    handle: ContractHandle,
}

impl DistributorContract {
    pub fn new(transport: Arc<dyn ContractTransport>, address: &str) -> Result<Self> {
        Ok(Self {
            handle: ContractHandle::new(transport, ContractKind::Distributor, address)?,
        })
    }

    pub fn address(&self) -> &str {
        self.handle.address()
    }

    /// Reads the distribution recorded for `snapshot`.
    ///
    /// The contract returns
    /// `(totalAmount, eligibleSupply, claimedAmount, createdAt, claimDeadline)`.
    pub async fn get_distribution(&self, snapshot: SnapshotId) -> Result<Distribution> {
        let call = self
            .handle
            .call("getDistribution")
            .arg(CallArg::Uint(snapshot.as_u256()));
        self.handle
            .read("get_distribution", call, |v| decode_distribution(snapshot, v))
            .await
    }

    /// Supply counted toward `snapshot`, excluding reserved holdings.
    pub async fn eligible_supply_at(&self, snapshot: SnapshotId) -> Result<ScaledAmount> {
        let call = self
            .handle
            .call("eligibleSupplyAt")
            .arg(CallArg::Uint(snapshot.as_u256()));
        self.handle
            .read("eligible_supply_at", call, |v| v.into_uint().map(ScaledAmount))
            .await
    }

    pub async fn has_claimed(&self, snapshot: SnapshotId, account: &str) -> Result<bool> {
        require_address(account)?;
        let call = self
            .handle
            .call("hasClaimed")
            .arg(CallArg::Uint(snapshot.as_u256()))
            .arg(CallArg::Address(account.to_string()));
        self.handle.read("has_claimed", call, CallValue::into_bool).await
    }

    /// Amount `account` could claim for `snapshot` right now; zero once
    /// claimed or after the deadline.
    pub async fn claimable_amount(
        &self,
        snapshot: SnapshotId,
        account: &str,
    ) -> Result<ScaledAmount> {
        require_address(account)?;
        let call = self
            .handle
            .call("claimableAmount")
            .arg(CallArg::Uint(snapshot.as_u256()))
            .arg(CallArg::Address(account.to_string()));
        self.handle
            .read("claimable_amount", call, |v| v.into_uint().map(ScaledAmount))
            .await
    }

    /// Claims the signer's share of `snapshot`.
    pub async fn claim(&self, snapshot: SnapshotId) -> Result<TxReceipt> {
        let call = self
            .handle
            .call("claim")
            .arg(CallArg::Uint(snapshot.as_u256()));
        self.handle.write("claim", call).await
    }

    /// Snapshots the token and allocates `amount` to it. Role-gated.
    pub async fn create_distribution(&self, amount: ScaledAmount) -> Result<TxReceipt> {
        require_positive_amount(&amount.to_string(), amount)?;
        let call = self
            .handle
            .call("createDistribution")
            .arg(CallArg::Uint(amount.0));
        self.handle.write("create_distribution", call).await
    }

    /// Returns what was left unclaimed after the deadline. Role-gated.
    pub async fn reclaim_unclaimed(&self, snapshot: SnapshotId) -> Result<TxReceipt> {
        let call = self
            .handle
            .call("reclaimUnclaimed")
            .arg(CallArg::Uint(snapshot.as_u256()));
        self.handle.write("reclaim_unclaimed", call).await
    }
}

fn decode_distribution(
    snapshot: SnapshotId,
    value: CallValue,
) -> std::result::Result<Distribution, ShapeError> {
    let mut fields = value.into_tuple(5)?.into_iter();
    let mut next = || fields.next().unwrap_or(CallValue::Bool(false));

    Ok(Distribution {
        snapshot_id: snapshot,
        total_amount: ScaledAmount(next().into_uint()?),
        eligible_supply: ScaledAmount(next().into_uint()?),
        claimed_amount: ScaledAmount(next().into_uint()?),
        created_at: next().into_timestamp()?,
        claim_deadline: next().into_timestamp()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;
    use crate::transport::TransportError;
    use primitive_types::U256;
    use rwa_profit_domain::ErrorKind;

    const DISTRIBUTOR: &str = "0x4000000000000000000000000000000000000004";
    const HOLDER: &str = "0x9000000000000000000000000000000000000009";

    fn distribution_tuple() -> CallValue {
        CallValue::Tuple(vec![
            CallValue::Uint(U256::from(15_000_000_000u64)),
            CallValue::Uint(U256::from(315_000u64) * U256::exp10(18)),
            CallValue::Uint(U256::from(5_000_000_000u64)),
            CallValue::Uint(U256::from(1_767_225_600u64)),
            CallValue::Uint(U256::from(1_798_761_600u64)),
        ])
    }

    fn setup() -> (Arc<MockTransport>, DistributorContract) {
        let transport = Arc::new(MockTransport::new());
        let distributor = DistributorContract::new(transport.clone(), DISTRIBUTOR).unwrap();
        (transport, distributor)
    }

    #[tokio::test]
    async fn test_get_distribution() {
        let (transport, distributor) = setup();
        transport.respond("distributor.getDistribution(1)", distribution_tuple());

        let snapshot = SnapshotId::new(1u64).unwrap();
        let d = distributor.get_distribution(snapshot).await.unwrap();
        assert_eq!(d.snapshot_id, snapshot);
        assert_eq!(d.total_amount, ScaledAmount::from(15_000_000_000u64));
        assert_eq!(d.remaining(), ScaledAmount::from(10_000_000_000u64));
        assert_eq!(d.created_at.to_rfc3339(), "2026-01-01T00:00:00+00:00");
        assert_eq!(d.claim_deadline.to_rfc3339(), "2027-01-01T00:00:00+00:00");
    }

    #[tokio::test]
    async fn test_short_tuple_is_unexpected_response() {
        let (transport, distributor) = setup();
        transport.respond(
            "distributor.getDistribution(2)",
            CallValue::Tuple(vec![CallValue::Uint(U256::one())]),
        );

        let err = distributor
            .get_distribution(SnapshotId::new(2u64).unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedResponse);
        assert!(err.to_string().contains("expected tuple of 5"));
    }

    #[tokio::test]
    async fn test_claim_state_reads() {
        let (transport, distributor) = setup();
        transport.respond(
            &format!("distributor.hasClaimed(1,{HOLDER})"),
            CallValue::Bool(true),
        );
        transport.respond(
            &format!("distributor.claimableAmount(1,{HOLDER})"),
            CallValue::Uint(U256::zero()),
        );

        let snapshot = SnapshotId::new(1u64).unwrap();
        assert!(distributor.has_claimed(snapshot, HOLDER).await.unwrap());
        assert!(
            distributor
                .claimable_amount(snapshot, HOLDER)
                .await
                .unwrap()
                .is_zero()
        );
    }

    #[tokio::test]
    async fn test_claim_failure_is_classified() {
        let (transport, distributor) = setup();
        transport.fail_write(
            "distributor.claim(4)",
            TransportError::new("execution reverted: Distributor: already claimed"),
        );

        let err = distributor
            .claim(SnapshotId::new(4u64).unwrap())
            .await
            .unwrap_err();
        match &err {
            rwa_profit_domain::DistributionError::RemoteCallFailure {
                contract,
                operation,
                ..
            } => {
                assert_eq!(*contract, ContractKind::Distributor);
                assert_eq!(operation, "claim");
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(
            err.user_message(),
            "You have already claimed this distribution."
        );
    }

    #[tokio::test]
    async fn test_create_distribution_rejects_zero() {
        let (transport, distributor) = setup();
        assert!(
            distributor
                .create_distribution(ScaledAmount::zero())
                .await
                .is_err()
        );
        assert!(transport.sent().is_empty());

        distributor
            .create_distribution(ScaledAmount::from(1_000_000u64))
            .await
            .unwrap();
        assert_eq!(
            transport.sent(),
            vec!["distributor.createDistribution(1000000)".to_string()]
        );
    }

    #[tokio::test]
    async fn test_eligible_supply_at() {
        let (transport, distributor) = setup();
        transport.respond(
            "distributor.eligibleSupplyAt(1)",
            CallValue::Uint(U256::from(300_000u64) * U256::exp10(18)),
        );

        let supply = distributor
            .eligible_supply_at(SnapshotId::new(1u64).unwrap())
            .await
            .unwrap();
        assert_eq!(supply, ScaledAmount(U256::from(300_000u64) * U256::exp10(18)));
    }

    #[tokio::test]
    async fn test_reclaim_unclaimed() {
        let (transport, distributor) = setup();

        let receipt = distributor
            .reclaim_unclaimed(SnapshotId::new(1u64).unwrap())
            .await
            .unwrap();
        assert_eq!(receipt.tx_hash, MockTransport::tx_hash(1));
        assert_eq!(
            transport.sent(),
            vec!["distributor.reclaimUnclaimed(1)".to_string()]
        );
    }

    #[tokio::test]
    async fn test_reclaim_before_deadline_is_remote_failure() {
        let (transport, distributor) = setup();
        transport.fail_write(
            "distributor.reclaimUnclaimed(2)",
            TransportError::new("execution reverted: claim period not ended"),
        );

        let err = distributor
            .reclaim_unclaimed(SnapshotId::new(2u64).unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RemoteCallFailure);
    }
}
