use shared_types::{
    has_permission, module, Claims, ClaimsError, ClaimsReader, ClaimsState, PermissionEvaluator,
    StaticClaims,
};

use crate::common::claims;

/// Identifiers covering known, unknown and oddly-shaped module names.
const MODULE_IDS: &[&str] = &[
    module::DASHBOARD,
    module::STAFF,
    module::SETTINGS,
    module::UTILITY,
    module::SUBSCRIPTION,
    module::COUNTRY,
    module::SALONS,
    "inventory",
    "Staff",
    " staff",
];

/// Permission sets the properties are checked against.
const PERMISSION_SETS: &[&[&str]] = &[
    &[],
    &[module::STAFF],
    &[module::STAFF, module::SETTINGS],
    &[module::DASHBOARD, module::COUNTRY, "inventory"],
];

struct BrokenCredential(ClaimsError);

impl ClaimsReader for BrokenCredential {
    fn read_claims(&self) -> Result<Option<Claims>, ClaimsError> {
        Err(self.0.clone())
    }
}

#[test]
fn super_admin_is_granted_every_module() {
    for set in PERMISSION_SETS {
        let c = claims(true, set);
        for module_id in MODULE_IDS {
            assert!(
                has_permission(Some(&c), Some(module_id)),
                "super admin denied {module_id:?} with permissions {set:?}"
            );
        }
    }
}

#[test]
fn regular_principal_granted_exactly_listed_modules() {
    for set in PERMISSION_SETS {
        let c = claims(false, set);
        for module_id in MODULE_IDS {
            assert_eq!(
                has_permission(Some(&c), Some(module_id)),
                set.contains(module_id),
                "wrong decision for {module_id:?} with permissions {set:?}"
            );
        }
    }
}

#[test]
fn public_access_granted_in_every_claims_state() {
    let mut states: Vec<Option<Claims>> = vec![None];
    for set in PERMISSION_SETS {
        states.push(Some(claims(false, set)));
        states.push(Some(claims(true, set)));
    }
    for state in &states {
        assert!(has_permission(state.as_ref(), None));
        assert!(has_permission(state.as_ref(), Some("")));
    }
}

#[test]
fn no_claims_denies_every_named_module() {
    for module_id in MODULE_IDS {
        assert!(!has_permission(None, Some(module_id)));
    }
}

#[test]
fn repeated_checks_are_stable() {
    let evaluator = PermissionEvaluator::activate(&StaticClaims(Some(claims(
        false,
        &[module::STAFF],
    ))));
    for module_id in MODULE_IDS {
        let first = evaluator.has_permission(Some(module_id));
        for _ in 0..3 {
            assert_eq!(evaluator.has_permission(Some(module_id)), first);
        }
    }
}

#[test]
fn scenario_staff_and_settings() {
    let evaluator = PermissionEvaluator::activate(&StaticClaims(Some(claims(
        false,
        &[module::STAFF, module::SETTINGS],
    ))));
    assert!(evaluator.has_permission(Some(module::STAFF)));
    assert!(!evaluator.has_permission(Some(module::COUNTRY)));
    assert!(evaluator.has_permission(None));
}

#[test]
fn scenario_missing_token() {
    let evaluator = PermissionEvaluator::activate(&StaticClaims(None));
    assert!(!evaluator.is_loading());
    assert!(!evaluator.has_permission(Some(module::DASHBOARD)));
    assert!(evaluator.has_permission(None));
}

#[test]
fn scenario_super_admin_without_permissions() {
    let evaluator = PermissionEvaluator::activate(&StaticClaims(Some(claims(true, &[]))));
    assert!(evaluator.has_permission(Some(module::COUNTRY)));
}

#[test]
fn every_reader_failure_fails_closed() {
    let failures = [
        ClaimsError::MissingSecret,
        ClaimsError::Expired,
        ClaimsError::WrongTokenType,
        ClaimsError::Invalid("bad signature".to_string()),
    ];
    for failure in failures {
        let evaluator = PermissionEvaluator::activate(&BrokenCredential(failure));
        assert_eq!(evaluator.state(), &ClaimsState::Resolved(None));
        for module_id in MODULE_IDS {
            assert!(!evaluator.has_permission(Some(module_id)));
        }
        assert!(evaluator.has_permission(None));
    }
}

#[test]
fn pending_then_resolved_exactly_once() {
    let mut evaluator = PermissionEvaluator::new();
    assert!(evaluator.is_loading());

    assert!(evaluator.settle::<ClaimsError>(Ok(None)));
    assert!(!evaluator.is_loading());

    // A later, more privileged result must not replace the settled one.
    assert!(!evaluator.settle::<ClaimsError>(Ok(Some(claims(true, &[])))));
    assert!(evaluator.claims().is_none());
    assert!(!evaluator.has_permission(Some(module::DASHBOARD)));
}
