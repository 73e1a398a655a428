//! Variables example set.

use primer_harness::{
    units::ether, CallOptions, DeployOptions, Harness, HarnessError, Value, Visibility, U256,
};

#[test_log::test]
fn example1_state_variable_with_default_value() {
    let h = Harness::dev().unwrap();
    let contract = h.deploy("Variables1", &[], DeployOptions::default()).unwrap();
    assert_eq!(contract.read("name", &[]).unwrap(), "Example 1");
}

#[test_log::test]
fn example2_constructor_sets_state_variable() {
    let h = Harness::dev().unwrap();
    let contract = h
        .deploy("Variables2", &["Example 2".into()], DeployOptions::default())
        .unwrap();
    assert_eq!(contract.read("name", &[]).unwrap(), "Example 2");
}

mod example3 {
    use super::*;

    #[test_log::test]
    fn blank_name_by_default() {
        let h = Harness::dev().unwrap();
        let contract = h.deploy("Variables3", &[], DeployOptions::default()).unwrap();
        assert_eq!(contract.read("getName", &[]).unwrap(), "");
    }

    #[test_log::test]
    fn setter_updates_private_state() {
        let h = Harness::dev().unwrap();
        let contract = h.deploy("Variables3", &[], DeployOptions::default()).unwrap();
        contract
            .send("setName", &["Example 3".into()], CallOptions::default())
            .unwrap();
        assert_eq!(contract.read("getName", &[]).unwrap(), "Example 3");
    }

    #[test_log::test]
    fn private_name_is_not_exposed() {
        let h = Harness::dev().unwrap();
        let contract = h.deploy("Variables3", &[], DeployOptions::default()).unwrap();
        let hash = h.state_hash();
        let err = contract.read("name", &[]).unwrap_err();
        assert_eq!(
            err,
            HarnessError::Visibility {
                method: "name".into(),
                visibility: Visibility::Private
            }
        );
        assert_eq!(h.state_hash(), hash);
    }
}

mod example4 {
    use super::*;

    #[test_log::test]
    fn name_constant() {
        let h = Harness::dev().unwrap();
        let contract = h.deploy("Variables4", &[], DeployOptions::default()).unwrap();
        assert_eq!(contract.read("name", &[]).unwrap(), "Example 4");
    }

    #[test_log::test]
    fn owner_is_immutable_deployer() {
        let h = Harness::dev().unwrap();
        let contract = h.deploy("Variables4", &[], DeployOptions::default()).unwrap();
        assert_eq!(contract.read("owner", &[]).unwrap(), h.signers()[0].address());
        assert!(matches!(
            contract.send("setOwner", &[h.signers()[1].address().into()], CallOptions::default()),
            Err(HarnessError::UnknownMethod { .. })
        ));
    }
}

mod example5 {
    use super::*;

    #[test_log::test]
    fn this_global() {
        let h = Harness::dev().unwrap();
        let contract = h.deploy("Variables5", &[], DeployOptions::default()).unwrap();
        assert_eq!(contract.read("contractAddress", &[]).unwrap(), contract.address());
    }

    #[test_log::test]
    fn msg_and_tx_globals() {
        let h = Harness::dev().unwrap();
        let contract = h.deploy("Variables5", &[], DeployOptions::default()).unwrap();
        contract
            .send("pay", &[], CallOptions::new().value(ether(1)))
            .unwrap();

        let payer = h.signers()[0].address();
        assert_eq!(contract.read("amount", &[]).unwrap(), ether(1));
        assert_eq!(contract.read("payer", &[]).unwrap(), payer);
        assert_eq!(contract.read("origin", &[]).unwrap(), payer);
    }

    #[test_log::test]
    fn msg_sender_follows_connected_signer() {
        let h = Harness::dev().unwrap();
        let contract = h.deploy("Variables5", &[], DeployOptions::default()).unwrap();
        let other = h.signers()[4];
        contract
            .connect(&other)
            .send("pay", &[], CallOptions::new().value(ether(2)))
            .unwrap();
        assert_eq!(contract.read("payer", &[]).unwrap(), other.address());
        assert_eq!(contract.balance(), ether(2));
    }

    #[test_log::test]
    fn block_global() {
        let h = Harness::dev().unwrap();
        let contract = h.deploy("Variables5", &[], DeployOptions::default()).unwrap();
        let block = h.block();

        let result = contract.read("getBlockInfo", &[]).unwrap();
        assert_eq!(result.len(), 5);
        assert_eq!(result.field("blockNumber").unwrap(), &Value::from(block.number));
        assert_eq!(result.field("timestamp").unwrap(), &Value::from(block.timestamp));
        assert_eq!(result[2], U256::from(31337u64));
        assert_eq!(result.field("coinbase").unwrap(), &Value::from(block.coinbase));
        assert_eq!(result[4], U256::from(h.config().chain.block_gas_limit));
    }

    #[test_log::test]
    fn block_advances_with_each_transaction() {
        let h = Harness::dev().unwrap();
        let contract = h.deploy("Variables5", &[], DeployOptions::default()).unwrap();
        let first = contract.read("getBlockInfo", &[]).unwrap();

        let receipt = contract.send("pay", &[], CallOptions::default()).unwrap();
        let second = contract.read("getBlockInfo", &[]).unwrap();

        assert_eq!(second[0], U256::from(receipt.block_number));
        assert_eq!(receipt.block_number, 2);
        assert_ne!(first[1], second[1]);
    }
}
