use super::{Membership, MembershipTest};

/// Interest partitions, most urgent first.
pub fn interest_memberships() -> Vec<Membership> {
    vec![
        Membership::new(
            "Errors",
            Some("Items with errors must be fixed before they can be approved."),
            MembershipTest::HasErrors,
        ),
        Membership::new(
            "Disputed",
            Some("Several values have votes and none is approved yet."),
            MembershipTest::Disputed,
        ),
        Membership::new(
            "Warnings",
            Some("Items with warnings should be checked."),
            MembershipTest::HasWarnings,
        ),
        Membership::new(
            "Not approved",
            Some("A value wins but does not have enough votes to be approved."),
            MembershipTest::NotApproved,
        ),
        Membership::new("Approved", None, MembershipTest::Approved),
        Membership::new(
            "Missing",
            Some("Nothing is entered or inherited for these items."),
            MembershipTest::Missing,
        ),
    ]
}
