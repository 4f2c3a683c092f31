//! Property tests: random pickup/drop/hit/tick sequences keep the
//! coordinator's map consistent with what players actually wear.

use armor_shield::core::config::{ConfiguredShield, ShieldSettings};
use armor_shield::entity::{find_body_armor, ArmorType, DamageCause, DamageContext, ItemKind, ItemType};
use armor_shield::simulation::Server;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Give(usize, ItemKind),
    Drop(usize, usize),
    Hit(usize, f32),
    Tick(f32),
}

fn item_kind() -> impl Strategy<Value = ItemKind> {
    prop_oneof![
        Just(ItemKind::BodyArmor(ArmorType::Light)),
        Just(ItemKind::BodyArmor(ArmorType::Combat)),
        Just(ItemKind::BodyArmor(ArmorType::Heavy)),
        Just(ItemKind::Other(ItemType::Medkit)),
        Just(ItemKind::Other(ItemType::Coin)),
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..2usize, item_kind()).prop_map(|(p, k)| Op::Give(p, k)),
        (0..2usize, 0..6usize).prop_map(|(p, i)| Op::Drop(p, i)),
        (0..2usize, 1.0f32..40.0).prop_map(|(p, a)| Op::Hit(p, a)),
        (0.1f32..5.0).prop_map(Op::Tick),
    ]
}

/// Light armor is deliberately left unconfigured
fn settings() -> ShieldSettings {
    let persistent = ConfiguredShield {
        persistent: true,
        ..ConfiguredShield::with_amount(30.0)
    };
    ShieldSettings::empty()
        .with_shield(ArmorType::Combat, persistent)
        .with_shield(ArmorType::Heavy, ConfiguredShield { sustain: 4.0, ..persistent })
}

proptest! {
    #[test]
    fn shields_track_worn_armor(ops in prop::collection::vec(op(), 1..60)) {
        let mut server = Server::new(settings());
        let players = [server.spawn_player("A"), server.spawn_player("B")];
        // Light armor never gets a shield, and damage never changes the map
        let configured = |kind: ArmorType| kind != ArmorType::Light;

        for op in ops {
            let before = server.coordinator().active_count();
            match op {
                Op::Give(p, kind) => {
                    server.give_item(players[p], kind).unwrap();
                }
                Op::Drop(p, idx) => {
                    let inventory = &server.host().player(players[p]).unwrap().inventory;
                    if let Some(item) = inventory.get(idx).copied() {
                        server.remove_item(players[p], item.serial).unwrap();
                    }
                }
                Op::Hit(p, amount) => {
                    server.damage(players[p], DamageContext::new(amount, DamageCause::Firearm)).unwrap();
                    prop_assert_eq!(server.coordinator().active_count(), before);
                }
                Op::Tick(dt) => server.tick(dt),
            }

            for &id in &players {
                let player = server.host().player(id).unwrap();
                let worn = find_body_armor(&player.inventory, None);
                let shielded: Vec<_> = server
                    .coordinator()
                    .active_shields()
                    .filter(|(_, active)| active.player == id)
                    .map(|(serial, _)| *serial)
                    .collect();

                match worn {
                    Some(armor) if configured(armor.armor_type) => {
                        prop_assert_eq!(shielded, vec![armor.serial]);
                        prop_assert_eq!(player.ahp.processes().len(), 1);
                    }
                    _ => {
                        prop_assert!(shielded.is_empty());
                        prop_assert!(player.ahp.processes().is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn repeated_pickups_never_duplicate(extra in 1..10usize) {
        let mut server = Server::new(settings());
        let p = server.spawn_player("A");
        let vest = server.give_item(p, ItemKind::BodyArmor(ArmorType::Combat)).unwrap();
        let handle = *server.coordinator().shield_for(vest.serial).unwrap();

        for _ in 0..extra {
            server.give_item(p, ItemKind::Other(ItemType::Coin)).unwrap();
        }

        prop_assert_eq!(server.coordinator().active_count(), 1);
        prop_assert_eq!(server.coordinator().shield_for(vest.serial).unwrap().kill_code, handle.kill_code);
        prop_assert_eq!(server.host().player(p).unwrap().ahp.processes().len(), 1);
    }
}
