//! Client facade tying the transaction pipeline together: build, bind to the
//! latest block, sign and broadcast.

pub mod config;

use std::sync::Arc;

use protocol::byte_codec::hex_to_bytes;
use protocol::traits::{Context, NetworkGateway, Signer};
use protocol::types::{
    BroadcastResult, DecodedParameters, KeyHandle, RawTransaction, ResourceCode, SignedEnvelope,
};
use protocol::ProtocolResult;

pub use core_builder::{AssetIssueOptions, PermissionOptions, NATIVE_TOKEN};

pub struct Client<G: NetworkGateway> {
    gateway: Arc<G>,
}

impl<G: NetworkGateway> Clone for Client<G> {
    fn clone(&self) -> Self {
        Client {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

impl<G: NetworkGateway> Client<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Client { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Bind to the latest block known by the gateway.
    pub async fn add_ref(&self, ctx: Context, tx: RawTransaction) -> ProtocolResult<RawTransaction> {
        core_binder::bind_latest(ctx, self.gateway.as_ref(), tx).await
    }

    /// Bind, sign with the given signer and broadcast.
    pub async fn send_transaction<S: Signer + ?Sized>(
        &self,
        ctx: Context,
        signer: &S,
        key: &KeyHandle,
        tx: RawTransaction,
    ) -> ProtocolResult<BroadcastResult> {
        let tx = self.add_ref(ctx.clone(), tx).await?;
        core_signer::ensure_bound(&tx)?;

        let txid = tx.txid()?;
        let envelope = signer.sign(ctx.clone(), tx, key).await?;

        log::info!("[client]: broadcast transaction {}", txid.as_hex());
        self.gateway.broadcast(ctx, envelope).await
    }

    /// Broadcast an envelope signed elsewhere.
    pub async fn send_hex_str(&self, ctx: Context, hex: &str) -> ProtocolResult<BroadcastResult> {
        hex_to_bytes(hex)?;

        self.gateway
            .broadcast(ctx, SignedEnvelope::new(hex.to_owned()))
            .await
    }

    pub fn send(
        &self,
        token: &str,
        from: &str,
        to: &str,
        amount: i64,
    ) -> ProtocolResult<PendingTransaction<'_, G>> {
        self.pending(core_builder::transfer(token, from, to, amount)?)
    }

    pub fn send_with_note(
        &self,
        token: &str,
        from: &str,
        to: &str,
        amount: i64,
        note: &str,
    ) -> ProtocolResult<PendingTransaction<'_, G>> {
        let tx = core_builder::transfer(token, from, to, amount)?;

        self.pending(core_builder::with_memo(tx, note))
    }

    /// Unbound transfer raw data, for offline preview.
    pub fn send_hex_preview(
        &self,
        token: &str,
        from: &str,
        to: &str,
        amount: i64,
    ) -> ProtocolResult<String> {
        core_builder::transfer_hex(token, from, to, amount)
    }

    pub fn update_account_name(
        &self,
        address: &str,
        name: &str,
    ) -> ProtocolResult<PendingTransaction<'_, G>> {
        self.pending(core_builder::account_update(address, name)?)
    }

    pub fn update_witness_url(
        &self,
        address: &str,
        url: &str,
    ) -> ProtocolResult<PendingTransaction<'_, G>> {
        self.pending(core_builder::witness_update(address, url)?)
    }

    pub fn withdraw_balance(&self, address: &str) -> ProtocolResult<PendingTransaction<'_, G>> {
        self.pending(core_builder::withdraw_balance(address)?)
    }

    pub fn freeze_balance(
        &self,
        address: &str,
        amount: i64,
        duration: i64,
        resource: ResourceCode,
        receiver: Option<&str>,
    ) -> ProtocolResult<PendingTransaction<'_, G>> {
        self.pending(core_builder::freeze_balance(
            address, amount, duration, resource, receiver,
        )?)
    }

    pub fn unfreeze_balance(
        &self,
        address: &str,
        resource: ResourceCode,
        receiver: Option<&str>,
    ) -> ProtocolResult<PendingTransaction<'_, G>> {
        self.pending(core_builder::unfreeze_balance(address, resource, receiver)?)
    }

    pub fn unfreeze_assets(&self, address: &str) -> ProtocolResult<PendingTransaction<'_, G>> {
        self.pending(core_builder::unfreeze_asset(address)?)
    }

    pub fn apply_for_delegate(
        &self,
        address: &str,
        url: &str,
    ) -> ProtocolResult<PendingTransaction<'_, G>> {
        self.pending(core_builder::witness_create(address, url)?)
    }

    pub fn vote_for_witnesses(
        &self,
        address: &str,
        votes: &[(&str, i64)],
    ) -> ProtocolResult<PendingTransaction<'_, G>> {
        self.pending(core_builder::vote(address, votes)?)
    }

    pub fn participate_asset(
        &self,
        address: &str,
        issuer: &str,
        token: &str,
        amount: i64,
    ) -> ProtocolResult<PendingTransaction<'_, G>> {
        self.pending(core_builder::participate_asset(address, issuer, token, amount)?)
    }

    pub fn create_token(
        &self,
        address: &str,
        options: AssetIssueOptions,
    ) -> ProtocolResult<PendingTransaction<'_, G>> {
        self.pending(core_builder::asset_issue(address, options)?)
    }

    pub fn create_exchange(
        &self,
        address: &str,
        first_token_id: &str,
        first_token_balance: i64,
        second_token_id: &str,
        second_token_balance: i64,
    ) -> ProtocolResult<PendingTransaction<'_, G>> {
        self.pending(core_builder::exchange_create(
            address,
            first_token_id,
            first_token_balance,
            second_token_id,
            second_token_balance,
        )?)
    }

    pub fn inject_exchange(
        &self,
        address: &str,
        exchange_id: i64,
        token_id: &str,
        quant: i64,
    ) -> ProtocolResult<PendingTransaction<'_, G>> {
        self.pending(core_builder::exchange_inject(
            address,
            exchange_id,
            token_id,
            quant,
        )?)
    }

    pub fn withdraw_exchange(
        &self,
        address: &str,
        exchange_id: i64,
        token_id: &str,
        quant: i64,
    ) -> ProtocolResult<PendingTransaction<'_, G>> {
        self.pending(core_builder::exchange_withdraw(
            address,
            exchange_id,
            token_id,
            quant,
        )?)
    }

    pub fn transaction_exchange(
        &self,
        address: &str,
        exchange_id: i64,
        token_id: &str,
        quant: i64,
        expected: i64,
    ) -> ProtocolResult<PendingTransaction<'_, G>> {
        self.pending(core_builder::exchange_transaction(
            address,
            exchange_id,
            token_id,
            quant,
            expected,
        )?)
    }

    pub fn trigger_smart_contract(
        &self,
        address: &str,
        contract_address: &str,
        data: &str,
        call_value: i64,
        call_token_value: i64,
        token_id: i64,
    ) -> ProtocolResult<PendingTransaction<'_, G>> {
        self.pending(core_builder::trigger_smart_contract(
            address,
            contract_address,
            data,
            call_value,
            call_token_value,
            token_id,
        )?)
    }

    pub fn trigger_smart_contract_hex(
        &self,
        address: &str,
        contract_address: &str,
        data: &str,
        call_value: i64,
        call_token_value: i64,
        token_id: i64,
    ) -> ProtocolResult<String> {
        core_builder::trigger_smart_contract_hex(
            address,
            contract_address,
            data,
            call_value,
            call_token_value,
            token_id,
        )
    }

    pub fn update_account_permissions(
        &self,
        address: &str,
        owner: PermissionOptions,
        witness: Option<PermissionOptions>,
        actives: Vec<PermissionOptions>,
    ) -> ProtocolResult<PendingTransaction<'_, G>> {
        self.pending(core_builder::account_permission_update(
            address, owner, witness, actives,
        )?)
    }

    /// Decode a contract parameter given as hex, the contract type by its
    /// wire name.
    pub fn parameter_value(&self, hex: &str, contract_type: &str) -> ProtocolResult<DecodedParameters> {
        core_decoder::decode_named(hex, contract_type)
    }

    fn pending(&self, tx: RawTransaction) -> ProtocolResult<PendingTransaction<'_, G>> {
        Ok(PendingTransaction { client: self, tx })
    }
}

/// A built transaction waiting for a signer.
pub struct PendingTransaction<'a, G: NetworkGateway> {
    client: &'a Client<G>,
    tx:     RawTransaction,
}

impl<'a, G: NetworkGateway> PendingTransaction<'a, G> {
    pub fn transaction(&self) -> &RawTransaction {
        &self.tx
    }

    pub fn into_transaction(self) -> RawTransaction {
        self.tx
    }

    pub async fn send<S: Signer + ?Sized>(
        self,
        ctx: Context,
        signer: &S,
        key: &KeyHandle,
    ) -> ProtocolResult<BroadcastResult> {
        self.client.send_transaction(ctx, signer, key, self.tx).await
    }
}
