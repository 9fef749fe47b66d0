#![no_std]

multiversx_sc::imports!();

pub mod dispatch;
pub mod errors;
pub mod governance;
pub mod types;

use errors::{
    ERR_ALREADY_FINISHED, ERR_ALREADY_VOTED, ERR_INVALID_TOKEN, ERR_NOT_FOUND, ERR_NO_DEPOSIT,
    ERR_TOO_EARLY, ERR_VOTING_CLOSED, ERR_WITHDRAWAL_LOCKED, ERR_WRONG_TOKEN, ERR_ZERO_AMOUNT,
};
use types::{Proposal, ProposalAction, ProposalStatus};

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait DaoVoting: governance::GovernanceModule + dispatch::DispatchModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        administrator: ManagedAddress,
        voting_token: TokenIdentifier,
        minimum_quorum: BigUint,
        debating_period_duration: u64,
    ) {
        require!(voting_token.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);

        self.administrator().set(&administrator);
        self.voting_token().set(&voting_token);
        self.minimum_quorum().set(&minimum_quorum);
        self.debating_period_duration().set(debating_period_duration);
        self.proposal_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: deposit
    // Voting weight is the custodied balance of the voting token.
    // ========================================================

    #[endpoint(deposit)]
    #[payable("*")]
    fn deposit(&self) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().single_esdt();

        require!(
            payment.token_identifier == self.voting_token().get(),
            ERR_WRONG_TOKEN
        );
        require!(payment.amount > 0u64, ERR_ZERO_AMOUNT);

        self.deposits(&caller)
            .update(|balance| *balance += &payment.amount);

        self.deposit_event(&caller, &payment.amount);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Returns the whole balance once the last voted proposal
    // is finished.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self) {
        let caller = self.blockchain().get_caller();
        self.require_not_locked(&caller);

        let amount = self.deposits(&caller).get();

        self.deposits(&caller).clear();
        self.last_voted_proposal(&caller).clear();

        // The ledger rejects zero-value transfers
        if amount > 0u64 {
            let voting_token = self.voting_token().get();
            self.send().direct_esdt(&caller, &voting_token, 0, &amount);
        }

        self.withdraw_event(&caller, &amount);
    }

    // ========================================================
    // ENDPOINT: addProposal
    // Administrator only. The action runs if the proposal passes.
    // ========================================================

    #[endpoint(addProposal)]
    fn add_proposal(
        &self,
        target: ManagedAddress,
        description: ManagedBuffer,
        endpoint: ManagedBuffer,
        arguments: MultiValueEncoded<ManagedBuffer>,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_administrator(&caller);

        let proposal_id = self.proposal_count().get() + 1u64;
        let created_at = self.blockchain().get_block_timestamp();

        let proposal = Proposal {
            id: proposal_id,
            description,
            action: ProposalAction {
                target,
                endpoint,
                arguments: arguments.to_vec(),
            },
            created_at,
            vote_count: BigUint::zero(),
            positive_vote_count: BigUint::zero(),
            status: ProposalStatus::Open,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);

        self.proposal_added_event(
            proposal_id,
            created_at,
            &proposal.action.target,
            &proposal.description,
        );

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // Weighted by the deposit at the moment of voting.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, in_favor: bool) {
        let caller = self.blockchain().get_caller();
        require!(!self.proposals(proposal_id).is_empty(), ERR_NOT_FOUND);

        let weight = self.deposits(&caller).get();
        require!(weight > 0u64, ERR_NO_DEPOSIT);

        let mut proposal = self.proposals(proposal_id).get();

        // The debate window gates votes, even if nobody finished the proposal yet
        let now = self.blockchain().get_block_timestamp();
        let debate_ends_at = proposal.debate_ends_at(self.debating_period_duration().get());
        require!(now < debate_ends_at, ERR_VOTING_CLOSED);
        require!(proposal.is_open(), ERR_ALREADY_FINISHED);
        require!(
            !self.has_voted(proposal_id, &caller).get(),
            ERR_ALREADY_VOTED
        );

        proposal.vote_count += &weight;
        if in_favor {
            proposal.positive_vote_count += &weight;
        }

        self.proposals(proposal_id).set(&proposal);
        self.has_voted(proposal_id, &caller).set(true);
        // Only the most recent vote keeps the deposit locked
        self.last_voted_proposal(&caller).set(proposal_id);

        self.vote_event(proposal_id, &caller, in_favor, &weight);
    }

    // ========================================================
    // ENDPOINT: finishProposal
    // Callable by anyone once the debating period is over.
    // Open → Finished, running the action if approved.
    // ========================================================

    #[endpoint(finishProposal)]
    fn finish_proposal(&self, proposal_id: u64) -> bool {
        require!(!self.proposals(proposal_id).is_empty(), ERR_NOT_FOUND);

        let mut proposal = self.proposals(proposal_id).get();
        require!(proposal.is_open(), ERR_ALREADY_FINISHED);

        let now = self.blockchain().get_block_timestamp();
        let debate_ends_at = proposal.debate_ends_at(self.debating_period_duration().get());
        require!(now >= debate_ends_at, ERR_TOO_EARLY);

        let approved = proposal.is_approved(&self.minimum_quorum().get());

        // Marked finished before the action runs so the target cannot re-enter
        // and finish it again. A failing action reverts this write too.
        proposal.status = ProposalStatus::Finished;
        self.proposals(proposal_id).set(&proposal);

        if approved {
            self.dispatch(&proposal.action);
        }

        self.proposal_finished_event(
            proposal_id,
            approved,
            &proposal.positive_vote_count,
            &proposal.vote_count,
            &proposal.description,
        );

        approved
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_not_locked(&self, principal: &ManagedAddress) {
        let locked_proposal_id = self.last_voted_proposal(principal).get();
        if locked_proposal_id == 0 {
            return;
        }

        let proposal = self.proposals(locked_proposal_id).get();
        require!(!proposal.is_open(), ERR_WITHDRAWAL_LOCKED);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(!self.proposals(proposal_id).is_empty(), ERR_NOT_FOUND);
        self.proposals(proposal_id).get()
    }

    #[view(isProposalVotingOpen)]
    fn is_proposal_voting_open(&self, proposal_id: u64) -> bool {
        if self.proposals(proposal_id).is_empty() {
            return false;
        }

        let proposal = self.proposals(proposal_id).get();
        let now = self.blockchain().get_block_timestamp();
        proposal.is_open()
            && now < proposal.debate_ends_at(self.debating_period_duration().get())
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("deposit")]
    fn deposit_event(&self, #[indexed] principal: &ManagedAddress, amount: &BigUint);

    #[event("withdraw")]
    fn withdraw_event(&self, #[indexed] principal: &ManagedAddress, amount: &BigUint);

    #[event("proposalAdded")]
    fn proposal_added_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] created_at: u64,
        #[indexed] target: &ManagedAddress,
        description: &ManagedBuffer,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] in_favor: bool,
        weight: &BigUint,
    );

    #[event("proposalFinished")]
    fn proposal_finished_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] approved: bool,
        #[indexed] positive_vote_count: &BigUint,
        #[indexed] vote_count: &BigUint,
        description: &ManagedBuffer,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Deposits ──

    #[view(userToDeposit)]
    #[storage_mapper("deposits")]
    fn deposits(&self, principal: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// 0 until the principal votes for the first time.
    #[view(userToLastProposalId)]
    #[storage_mapper("lastVotedProposal")]
    fn last_voted_proposal(&self, principal: &ManagedAddress) -> SingleValueMapper<u64>;

    // ── Proposals ──

    #[view(proposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[view(hasVoted)]
    #[storage_mapper("hasVoted")]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;
}
