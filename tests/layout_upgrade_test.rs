// Upgrade tests: the upgrade hook must keep every persisted balance, claim and
// proposal, append the proposal keys to a token-only deployment, and refuse to
// run against storage written by newer code.

use multiversx_sc::types::Address;
use multiversx_sc_scenario::{
    api::DebugApi, managed_address, managed_biguint, rust_biguint, whitebox_legacy::*,
};

use crowdfund_token::layout::{
    LayoutModule, CURRENT_LAYOUT_VERSION, PROPOSALS_LAYOUT_VERSION, TOKEN_LAYOUT_VERSION,
};
use crowdfund_token::ledger::AccountLedger;
use crowdfund_token::proposals::ProposalStore;
use crowdfund_token::settlement::SettlementEngine;
use crowdfund_token::types::SettlementOutcome;
use crowdfund_token::*;

const WASM_PATH: &str = "output/crowdfund-token.wasm";

type CrowdfundContract = crowdfund_token::ContractObj<DebugApi>;

struct UpgradeSetup<ContractObjBuilder>
where
    ContractObjBuilder: 'static + Copy + Fn() -> CrowdfundContract,
{
    b_mock: BlockchainStateWrapper,
    owner: Address,
    account1: Address,
    account2: Address,
    sc_wrapper: ContractObjWrapper<CrowdfundContract, ContractObjBuilder>,
}

fn setup<ContractObjBuilder>(builder: ContractObjBuilder) -> UpgradeSetup<ContractObjBuilder>
where
    ContractObjBuilder: 'static + Copy + Fn() -> CrowdfundContract,
{
    let rust_zero = rust_biguint!(0u64);
    let mut b_mock = BlockchainStateWrapper::new();
    let owner = b_mock.create_user_account(&rust_zero);
    let account1 = b_mock.create_user_account(&rust_zero);
    let account2 = b_mock.create_user_account(&rust_zero);
    let sc_wrapper = b_mock.create_sc_account(&rust_zero, Some(&owner), builder, WASM_PATH);

    b_mock
        .execute_tx(&owner, &sc_wrapper, &rust_zero, |sc| {
            sc.init();
        })
        .assert_ok();

    UpgradeSetup {
        b_mock,
        owner,
        account1,
        account2,
        sc_wrapper,
    }
}

#[test]
fn test_layout_versions_only_grow() {
    assert_eq!(TOKEN_LAYOUT_VERSION, 1);
    assert_eq!(PROPOSALS_LAYOUT_VERSION, 2);
    assert_eq!(CURRENT_LAYOUT_VERSION, PROPOSALS_LAYOUT_VERSION);
}

#[test]
fn test_upgrade_at_current_layout_keeps_state() {
    let mut us = setup(crowdfund_token::contract_obj);
    let owner = us.owner.clone();
    let account1 = us.account1.clone();
    let account2 = us.account2.clone();

    us.b_mock
        .execute_tx(&account1, &us.sc_wrapper, &rust_biguint!(0), |sc| {
            sc.claim();
        })
        .assert_ok();
    us.b_mock
        .execute_tx(&owner, &us.sc_wrapper, &rust_biguint!(0), |sc| {
            sc.create_proposal(managed_biguint!(10), managed_address!(&account2));
        })
        .assert_ok();
    us.b_mock
        .execute_tx(&account1, &us.sc_wrapper, &rust_biguint!(0), |sc| {
            sc.pledge(0, managed_biguint!(4));
        })
        .assert_ok();

    let result = us
        .b_mock
        .execute_tx(&owner, &us.sc_wrapper, &rust_biguint!(0), |sc| {
            sc.upgrade();
        });
    result.assert_ok();
    assert!(result.result_logs.iter().all(|log| {
        log.topics.first().map(|topic| topic.as_slice()) != Some(&b"layoutMigrated"[..])
    }));

    us.b_mock
        .execute_query(&us.sc_wrapper, |sc| {
            assert_eq!(sc.get_layout_version(), CURRENT_LAYOUT_VERSION);
            assert_eq!(sc.balance_of(managed_address!(&account1)), managed_biguint!(96));
            assert!(sc.has_claimed(managed_address!(&account1)));
            assert_eq!(sc.num_proposals(), 1);
            assert_eq!(sc.get_pledge(0, managed_address!(&account1)), managed_biguint!(4));

            let proposal = sc.get_proposal(0);
            assert_eq!(proposal.pledged_total, managed_biguint!(4));
            assert!(proposal.active);
        })
        .assert_ok();
}

#[test]
fn test_upgrade_from_token_layout_appends_proposals() {
    let mut us = setup(crowdfund_token::contract_obj);
    let owner = us.owner.clone();
    let account1 = us.account1.clone();
    let account2 = us.account2.clone();

    us.b_mock
        .execute_tx(&account1, &us.sc_wrapper, &rust_biguint!(0), |sc| {
            sc.claim();
            sc.transfer(managed_address!(&account2), managed_biguint!(25));
        })
        .assert_ok();

    // Rewind storage to what a token-only deployment leaves behind.
    us.b_mock
        .execute_tx(&owner, &us.sc_wrapper, &rust_biguint!(0), |sc| {
            sc.layout_version().clear();
            sc.proposal_count().clear();
            sc.total_escrowed().clear();
        })
        .assert_ok();
    us.b_mock
        .execute_query(&us.sc_wrapper, |sc| {
            assert_eq!(sc.get_layout_version(), TOKEN_LAYOUT_VERSION);
        })
        .assert_ok();

    let result = us
        .b_mock
        .execute_tx(&owner, &us.sc_wrapper, &rust_biguint!(0), |sc| {
            sc.upgrade();
        });
    result.assert_ok();
    let migrated = result
        .result_logs
        .iter()
        .find(|log| {
            log.topics.first().map(|topic| topic.as_slice()) == Some(&b"layoutMigrated"[..])
        })
        .expect("migration event");
    assert_eq!(migrated.topics[1], vec![TOKEN_LAYOUT_VERSION as u8]);
    assert_eq!(migrated.topics[2], vec![CURRENT_LAYOUT_VERSION as u8]);

    us.b_mock
        .execute_query(&us.sc_wrapper, |sc| {
            assert_eq!(sc.get_layout_version(), CURRENT_LAYOUT_VERSION);
            assert_eq!(sc.balance_of(managed_address!(&account1)), managed_biguint!(75));
            assert_eq!(sc.balance_of(managed_address!(&account2)), managed_biguint!(25));
            assert!(sc.has_claimed(managed_address!(&account1)));
            assert!(!sc.has_claimed(managed_address!(&account2)));
            assert_eq!(sc.num_proposals(), 0);

            let (minted, escrowed, claims) = sc.get_supply_stats().into_tuple();
            assert_eq!(minted, managed_biguint!(100));
            assert_eq!(escrowed, managed_biguint!(0));
            assert_eq!(claims, 1);
        })
        .assert_ok();

    // The appended layout is usable straight away.
    us.b_mock
        .execute_tx(&owner, &us.sc_wrapper, &rust_biguint!(0), |sc| {
            assert_eq!(sc.create_proposal(managed_biguint!(20), managed_address!(&account2)), 0);
        })
        .assert_ok();
    us.b_mock
        .execute_tx(&account1, &us.sc_wrapper, &rust_biguint!(0), |sc| {
            sc.pledge(0, managed_biguint!(20));
        })
        .assert_ok();
    us.b_mock
        .execute_tx(&owner, &us.sc_wrapper, &rust_biguint!(0), |sc| {
            assert_eq!(sc.end_proposal(0), SettlementOutcome::Disbursed);
        })
        .assert_ok();
    us.b_mock
        .execute_query(&us.sc_wrapper, |sc| {
            assert_eq!(sc.balance_of(managed_address!(&account1)), managed_biguint!(55));
            assert_eq!(sc.balance_of(managed_address!(&account2)), managed_biguint!(45));
        })
        .assert_ok();
}

#[test]
fn test_upgrade_rejects_newer_layout() {
    let mut us = setup(crowdfund_token::contract_obj);
    let owner = us.owner.clone();
    let account1 = us.account1.clone();

    us.b_mock
        .execute_tx(&account1, &us.sc_wrapper, &rust_biguint!(0), |sc| {
            sc.claim();
        })
        .assert_ok();
    us.b_mock
        .execute_tx(&owner, &us.sc_wrapper, &rust_biguint!(0), |sc| {
            sc.layout_version().set(CURRENT_LAYOUT_VERSION + 1);
        })
        .assert_ok();

    us.b_mock
        .execute_tx(&owner, &us.sc_wrapper, &rust_biguint!(0), |sc| {
            sc.upgrade();
        })
        .assert_user_error(ERR_LAYOUT_DOWNGRADE);

    us.b_mock
        .execute_query(&us.sc_wrapper, |sc| {
            assert_eq!(sc.get_layout_version(), CURRENT_LAYOUT_VERSION + 1);
            assert_eq!(sc.balance_of(managed_address!(&account1)), managed_biguint!(100));
        })
        .assert_ok();
}
