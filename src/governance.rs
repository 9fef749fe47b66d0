multiversx_sc::imports!();

use crate::errors::ERR_UNAUTHORIZED;

/// Governance parameters and the authority allowed to change them.
///
/// The authority is the set {administrator, this contract}. The contract
/// itself only ever acts through an approved proposal, see `dispatch`.
#[multiversx_sc::module]
pub trait GovernanceModule {
    #[endpoint(setMinimumQuorum)]
    fn set_minimum_quorum(&self, value: BigUint) {
        let caller = self.blockchain().get_caller();
        self.apply_minimum_quorum(&caller, value);
    }

    #[endpoint(setDebatingPeriodDuration)]
    fn set_debating_period_duration(&self, value: u64) {
        let caller = self.blockchain().get_caller();
        self.apply_debating_period_duration(&caller, value);
    }

    fn apply_minimum_quorum(&self, acting_as: &ManagedAddress, value: BigUint) {
        self.require_governor(acting_as);
        self.minimum_quorum().set(&value);
    }

    fn apply_debating_period_duration(&self, acting_as: &ManagedAddress, value: u64) {
        self.require_governor(acting_as);
        self.debating_period_duration().set(value);
    }

    fn require_administrator(&self, principal: &ManagedAddress) {
        require!(
            principal == &self.administrator().get(),
            ERR_UNAUTHORIZED
        );
    }

    fn require_governor(&self, principal: &ManagedAddress) {
        let is_administrator = principal == &self.administrator().get();
        let is_self = principal == &self.blockchain().get_sc_address();
        require!(is_administrator || is_self, ERR_UNAUTHORIZED);
    }

    // ── Configuration ──

    #[view(administrator)]
    #[storage_mapper("administrator")]
    fn administrator(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(votingToken)]
    #[storage_mapper("votingToken")]
    fn voting_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(minimumQuorum)]
    #[storage_mapper("minimumQuorum")]
    fn minimum_quorum(&self) -> SingleValueMapper<BigUint>;

    /// Seconds a proposal accepts votes after creation.
    #[view(debatingPeriodDuration)]
    #[storage_mapper("debatingPeriodDuration")]
    fn debating_period_duration(&self) -> SingleValueMapper<u64>;
}
