#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use rampart_core::components::OnHitEffect;
    use rampart_core::constants::*;
    use rampart_core::enums::{EnemyKind, TowerKind};

    use crate::enemy_profiles::{get_profile, spawn_multiplier, spawn_profile, EnemyProfile};
    use crate::tower_tables::{cost, get_spec, level_stats, sell_value, upgrade_cost};
    use crate::waves::*;

    // ---- Enemy profiles ----

    #[test]
    fn test_wave_one_is_unscaled() {
        for kind in EnemyKind::ALL {
            let base = get_profile(kind);
            assert_eq!(spawn_profile(kind, 1), base, "{kind:?} scaled at wave 1");
            assert_eq!(spawn_profile(kind, 0), base, "{kind:?} scaled at wave 0");
        }
    }

    #[test]
    fn test_basic_scaling_wave_five() {
        // level 4: health x1.48, reward x1.20, score x1.16
        let p = spawn_profile(EnemyKind::Basic, 5);
        assert_eq!(p.max_health, 21.0);
        assert_eq!(p.reward, 17);
        assert_eq!(p.score_value, 9);
        assert_eq!(p.speed, 0.85, "speed does not scale");
        assert_eq!(p.life_damage, 1);
    }

    #[test]
    fn test_boss_scales_gently() {
        assert_eq!(spawn_multiplier(EnemyKind::Boss), BOSS_SCALING_MULTIPLIER);
        assert_eq!(spawn_multiplier(EnemyKind::Tank), 1.0);

        let boss = spawn_profile(EnemyKind::Boss, 10);
        assert_eq!(boss.max_health, 231.0);
        assert_eq!(boss.reward, 178);
        assert_eq!(boss.score_value, 97);

        let harsh = get_profile(EnemyKind::Boss).scaled(10, 1.0);
        assert!(harsh.max_health > boss.max_health);
    }

    #[test]
    fn test_reward_and_score_floor() {
        let weak = EnemyProfile {
            speed: 1.0,
            max_health: 1.0,
            reward: 2,
            score_value: 0,
            life_damage: 1,
            size: 10.0,
        };
        let scaled = weak.scaled(3, 1.0);
        assert_eq!(scaled.reward, MIN_REWARD_AND_SCORE);
        assert_eq!(scaled.score_value, MIN_REWARD_AND_SCORE);
    }

    #[test]
    fn test_life_damage_by_kind() {
        assert_eq!(get_profile(EnemyKind::Basic).life_damage, 1);
        assert_eq!(get_profile(EnemyKind::Tank).life_damage, 2);
        assert_eq!(get_profile(EnemyKind::Boss).life_damage, 3);
    }

    // ---- Tower tables ----

    #[test]
    fn test_tower_prices() {
        assert_eq!(cost(TowerKind::Basic), 100);
        assert_eq!(cost(TowerKind::Rapid), 150);
        assert_eq!(cost(TowerKind::Sniper), 220);
        assert_eq!(cost(TowerKind::Frost), 170);

        assert_eq!(upgrade_cost(TowerKind::Basic, 1), Some(90));
        assert_eq!(upgrade_cost(TowerKind::Basic, 2), Some(140));
        assert_eq!(upgrade_cost(TowerKind::Basic, 3), None);
        assert_eq!(upgrade_cost(TowerKind::Frost, 2), Some(190));
    }

    #[test]
    fn test_every_upgrade_improves_the_tower() {
        for kind in TowerKind::ALL {
            for lvl in 1..MAX_TOWER_LEVEL {
                let before = level_stats(kind, lvl);
                let after = level_stats(kind, lvl + 1);
                let better = after.range > before.range
                    || after.damage > before.damage
                    || after.fire_rate_ticks < before.fire_rate_ticks;
                assert!(better, "{kind:?} level {lvl} is not an upgrade");
            }
        }
    }

    #[test]
    fn test_only_frost_slows() {
        for kind in TowerKind::ALL {
            let spec = get_spec(kind);
            for stats in spec.levels {
                assert_eq!(stats.splash_radius, 0.0);
                assert_eq!(stats.on_hit.is_some(), kind == TowerKind::Frost);
            }
        }
        assert_eq!(
            level_stats(TowerKind::Frost, 3).on_hit,
            Some(OnHitEffect::Slow {
                factor: 0.45,
                duration_ticks: 180
            })
        );
    }

    #[test]
    fn test_level_stats_clamps() {
        let first = level_stats(TowerKind::Sniper, 1);
        let last = level_stats(TowerKind::Sniper, 3);
        assert_eq!(level_stats(TowerKind::Sniper, 0), first);
        assert_eq!(level_stats(TowerKind::Sniper, 9), last);
    }

    #[test]
    fn test_display_figures() {
        let basic = level_stats(TowerKind::Basic, 1);
        assert!((basic.shots_per_sec() - 60.0 / 70.0).abs() < 1e-12);
        assert!((basic.dps() - 3.0 * 60.0 / 70.0).abs() < 1e-12);
    }

    #[test]
    fn test_sell_value_rounds() {
        assert_eq!(sell_value(100), 65);
        assert_eq!(sell_value(190), 124);
        assert_eq!(sell_value(0), 0);
    }

    // ---- Waves ----

    #[test]
    fn test_composition_early_waves() {
        assert_eq!(
            wave_composition(1),
            WaveComposition {
                basic: 7,
                ..Default::default()
            }
        );
        let w2 = wave_composition(2);
        assert_eq!((w2.basic, w2.fast), (9, 2));
        let w4 = wave_composition(4);
        assert_eq!((w4.basic, w4.fast, w4.swarm, w4.tank), (12, 2, 2, 0));
        let w5 = wave_composition(5);
        assert_eq!((w5.fast, w5.swarm, w5.tank), (3, 2, 1));
    }

    #[test]
    fn test_wave_eight_has_armored_pair() {
        let w8 = wave_composition(8);
        assert_eq!(w8.tank, 4);
        assert_eq!(w8.boss, 0);
    }

    #[test]
    fn test_wave_ten_has_boss() {
        let w10 = wave_composition(10);
        assert_eq!(w10.boss, 1);
        assert_eq!(w10.tank, 3, "no extra pair on wave 10");
        assert_eq!(w10.total(), 21 + 6 + 5 + 3 + 1);
    }

    #[test]
    fn test_wave_forty_has_both_bonuses() {
        let w40 = wave_composition(40);
        assert_eq!(w40.boss, 1);
        assert_eq!(w40.tank, 37 * 5 / 9 + 2);
    }

    #[test]
    fn test_blueprint_matches_composition() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for wave in 1..=20 {
            let blueprint = create_wave_blueprint(wave, &mut rng);
            let comp = wave_composition(wave);
            assert_eq!(blueprint.len() as u32, comp.total());
            for (kind, count) in summarize(&blueprint) {
                assert_eq!(count, comp.count(kind), "wave {wave} {kind:?}");
            }
        }
    }

    #[test]
    fn test_blueprint_is_seeded() {
        let a = create_wave_blueprint(12, &mut ChaCha8Rng::seed_from_u64(99));
        let b = create_wave_blueprint(12, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_summarize_order_and_omission() {
        let blueprint = [
            EnemyKind::Boss,
            EnemyKind::Basic,
            EnemyKind::Swarm,
            EnemyKind::Basic,
        ];
        assert_eq!(
            summarize(&blueprint),
            vec![
                (EnemyKind::Basic, 2),
                (EnemyKind::Swarm, 1),
                (EnemyKind::Boss, 1)
            ]
        );
        assert!(summarize(&[]).is_empty());
    }

    #[test]
    fn test_spawn_interval() {
        assert_eq!(spawn_interval(1), 43);
        assert_eq!(spawn_interval(10), 25);
        assert_eq!(spawn_interval(15), 15);
        assert_eq!(spawn_interval(30), SPAWN_INTERVAL_MIN);
    }

    #[test]
    fn test_wave_clear_bonus() {
        assert_eq!(wave_clear_bonus(1), 95);
        assert_eq!(wave_clear_bonus(10), 230);
    }
}
