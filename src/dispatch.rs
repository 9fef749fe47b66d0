multiversx_sc::imports!();

use crate::{errors::ERR_ACTION_EXECUTION_FAILED, types::ProposalAction};

const SET_MINIMUM_QUORUM: &[u8] = b"setMinimumQuorum";
const SET_DEBATING_PERIOD_DURATION: &[u8] = b"setDebatingPeriodDuration";

/// Executes the action of an approved proposal.
///
/// Any failure aborts the transaction, so nothing done by the enclosing
/// `finishProposal` call survives it.
#[multiversx_sc::module]
pub trait DispatchModule: crate::governance::GovernanceModule {
    fn dispatch(&self, action: &ProposalAction<Self::Api>) {
        let own_address = self.blockchain().get_sc_address();
        if action.target == own_address && self.is_governance_setter(&action.endpoint) {
            self.dispatch_to_self(&own_address, action);
        } else {
            // Includes other endpoints of this contract, e.g. finishProposal
            self.dispatch_to_target(action);
        }
    }

    fn is_governance_setter(&self, endpoint: &ManagedBuffer) -> bool {
        *endpoint == ManagedBuffer::from(SET_MINIMUM_QUORUM)
            || *endpoint == ManagedBuffer::from(SET_DEBATING_PERIOD_DURATION)
    }

    // Governance setters are decoded locally and applied acting as the
    // contract itself.
    fn dispatch_to_self(&self, acting_as: &ManagedAddress, action: &ProposalAction<Self::Api>) {
        require!(action.arguments.len() == 1, ERR_ACTION_EXECUTION_FAILED);
        let argument = action.arguments.get(0);

        if action.endpoint == ManagedBuffer::from(SET_MINIMUM_QUORUM) {
            let value = BigUint::from_bytes_be_buffer(&argument);
            self.apply_minimum_quorum(acting_as, value);
        } else {
            let value = match argument.parse_as_u64() {
                Some(value) => value,
                None => sc_panic!(ERR_ACTION_EXECUTION_FAILED),
            };
            self.apply_debating_period_duration(acting_as, value);
        }
    }

    // A failing callee aborts the transaction with its own error message, not
    // ERR_ACTION_EXECUTION_FAILED.
    fn dispatch_to_target(&self, action: &ProposalAction<Self::Api>) {
        let mut arguments = ManagedArgBuffer::new();
        for argument in action.arguments.iter() {
            arguments.push_arg_raw(argument.clone_value());
        }

        self.tx()
            .to(&action.target)
            .raw_call(action.endpoint.clone())
            .arguments_raw(arguments)
            .sync_call();
    }
}
