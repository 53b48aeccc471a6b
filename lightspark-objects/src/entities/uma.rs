use crate::{
    enums::{IncentivesIneligibilityReason, IncentivesStatus},
    types::{EntityId, Timestamp},
};

graphql_object! {
    typename = "UmaInvitation";

    /// An invitation for someone to create a UMA address.
    #[derive(Clone, Debug)]
    pub struct UmaInvitation {
        pub id: EntityId => "uma_invitation_id",
        pub created_at: Timestamp => "uma_invitation_created_at",
        pub updated_at: Timestamp => "uma_invitation_updated_at",
        pub code: String => "uma_invitation_code",
        pub url: String => "uma_invitation_url",
        pub inviter_uma: String => "uma_invitation_inviter_uma",
        /// Set once the invitation is claimed.
        pub invitee_uma: Option<String> => "uma_invitation_invitee_uma",
        pub incentives_status: IncentivesStatus
            => "uma_invitation_incentives_status",
        pub incentives_ineligibility_reason:
            Option<IncentivesIneligibilityReason>
            => "uma_invitation_incentives_ineligibility_reason",
    }
}

impl_entity!(UmaInvitation);
