multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Accepting votes until the debating period ends.
    Open,
    /// Resolved. Terminal state.
    Finished,
}

// ============================================================
// Proposal Action — what runs if the proposal is approved
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ProposalAction<M: ManagedTypeApi> {
    pub target: ManagedAddress<M>,
    pub endpoint: ManagedBuffer<M>,
    /// Already-encoded call arguments, passed through untouched.
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub description: ManagedBuffer<M>,
    pub action: ProposalAction<M>,
    pub created_at: u64,
    /// Sum of the weights of every vote cast.
    pub vote_count: BigUint<M>,
    /// Sum of the weights of the votes cast in favor.
    pub positive_vote_count: BigUint<M>,
    pub status: ProposalStatus,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn is_open(&self) -> bool {
        self.status == ProposalStatus::Open
    }

    /// First timestamp at which the proposal stops accepting votes.
    pub fn debate_ends_at(&self, debating_period_duration: u64) -> u64 {
        self.created_at.saturating_add(debating_period_duration)
    }

    pub fn is_approved(&self, minimum_quorum: &BigUint<M>) -> bool {
        is_approved(&self.vote_count, &self.positive_vote_count, minimum_quorum)
    }
}

/// Quorum is strictly exceeded and the positive votes are a strict majority.
/// A tie rejects.
pub fn is_approved<M: ManagedTypeApi>(
    vote_count: &BigUint<M>,
    positive_vote_count: &BigUint<M>,
    minimum_quorum: &BigUint<M>,
) -> bool {
    let quorum_met = vote_count > minimum_quorum;
    let half = vote_count / &BigUint::from(2u32);
    let majority = positive_vote_count > &half;
    quorum_met && majority
}
