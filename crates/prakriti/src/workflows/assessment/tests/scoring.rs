use super::common::*;
use crate::workflows::assessment::answers::Answer;
use crate::workflows::assessment::domain::{Dosha, ResponseLevel};
use crate::workflows::assessment::report::{guidance_for, AssessmentReport};
use crate::workflows::assessment::scoring::{aggregate, ScoreDistribution};

#[test]
fn vata_only_answers_score_fully_vata() {
    let sheet = sheet_with(vata_only);
    let result = aggregate(sheet.answers());

    assert!(!result.fallback);
    assert_eq!(result.raw.vata, 10);
    assert_eq!(result.raw.total(), 10);
    assert_eq!(
        result.distribution,
        ScoreDistribution {
            vata: 100,
            pitta: 0,
            kapha: 0
        }
    );

    let constitution = result.distribution.constitution();
    assert_eq!(constitution.primary, Dosha::Vata);
    assert_eq!(constitution.secondary, Dosha::Pitta);
}

#[test]
fn uniform_answers_split_evenly() {
    for level in [ResponseLevel::Yes, ResponseLevel::Somewhat] {
        let result = aggregate(sheet_with(|_| level).answers());
        assert_eq!(
            result.distribution,
            ScoreDistribution {
                vata: 33,
                pitta: 33,
                kapha: 33
            },
            "uniform {level:?} answers"
        );
        assert_eq!(result.distribution.constitution().label(), "Vata-Pitta");
    }
}

#[test]
fn all_no_answers_fall_back_to_balanced_kapha_lead() {
    let result = aggregate(sheet_with(|_| ResponseLevel::No).answers());

    assert!(result.fallback);
    assert_eq!(result.distribution, ScoreDistribution::BALANCED);
    let constitution = result.distribution.constitution();
    assert_eq!(constitution.primary, Dosha::Kapha);
    assert_eq!(constitution.secondary, Dosha::Vata);
}

#[test]
fn pitta_leaning_answers_select_pitta_vata_guidance() {
    let result = aggregate(
        sheet_with(|dosha| match dosha {
            Dosha::Vata => ResponseLevel::Somewhat,
            Dosha::Pitta => ResponseLevel::Yes,
            Dosha::Kapha => ResponseLevel::No,
        })
        .answers(),
    );

    assert_eq!(
        result.distribution,
        ScoreDistribution {
            vata: 33,
            pitta: 67,
            kapha: 0
        }
    );

    let report = AssessmentReport::new(result.distribution, None, today());
    assert_eq!(report.constitution.label(), "Pitta-Vata");
    assert_eq!(
        report.guidance.title(),
        "Pitta-Vata Prakriti (Fire & Water + Air & Ether)"
    );
    assert!(report
        .guidance
        .recommendations
        .diet
        .contains(&"Favor cooling foods like cucumber, mint, and coconut"));
    assert!(report.introduction().starts_with("Based on your Pitta-Vata constitution"));
}

#[test]
fn every_uniform_level_mix_stays_within_rounding_bounds() {
    let levels = ResponseLevel::ordered();
    for vata in levels {
        for pitta in levels {
            for kapha in levels {
                let result = aggregate(
                    sheet_with(|dosha| match dosha {
                        Dosha::Vata => vata,
                        Dosha::Pitta => pitta,
                        Dosha::Kapha => kapha,
                    })
                    .answers(),
                );

                let distribution = result.distribution;
                assert!(distribution.is_valid());
                assert!(
                    (99..=101).contains(&distribution.total()),
                    "{vata:?}/{pitta:?}/{kapha:?} summed to {}",
                    distribution.total()
                );

                let [first, second, third] = distribution.ranked();
                assert!(distribution.get(first) >= distribution.get(second));
                assert!(distribution.get(second) >= distribution.get(third));
                assert_ne!(first, second);
            }
        }
    }
}

/// Answers whose weights add up to the given raw score per dosha, mixing
/// Yes and Somewhat within each dosha.
fn answers_weighing(vata: u32, pitta: u32, kapha: u32) -> Vec<Answer> {
    let mut answers = Vec::new();
    for (dosha, weight) in [(Dosha::Vata, vata), (Dosha::Pitta, pitta), (Dosha::Kapha, kapha)] {
        for _ in 0..weight / 2 {
            answers.push(Answer {
                level: ResponseLevel::Yes,
                dosha,
            });
        }
        if weight % 2 == 1 {
            answers.push(Answer {
                level: ResponseLevel::Somewhat,
                dosha,
            });
        }
        answers.push(Answer {
            level: ResponseLevel::No,
            dosha,
        });
    }
    answers
}

#[test]
fn mixed_levels_round_each_share_independently() {
    let cases = [
        ((1, 1, 1), (33, 33, 33), 99),
        ((2, 2, 1), (40, 40, 20), 100),
        ((1, 1, 4), (17, 17, 67), 101),
        ((1, 1, 5), (14, 14, 71), 99),
    ];

    for ((vata, pitta, kapha), (expected_vata, expected_pitta, expected_kapha), total) in cases {
        let result = aggregate(&answers_weighing(vata, pitta, kapha));
        assert_eq!(
            (result.raw.vata, result.raw.pitta, result.raw.kapha),
            (vata, pitta, kapha)
        );
        assert_eq!(
            result.distribution,
            ScoreDistribution {
                vata: expected_vata,
                pitta: expected_pitta,
                kapha: expected_kapha,
            }
        );
        assert_eq!(result.distribution.total(), total);
    }
}

#[test]
fn every_reachable_weight_mix_stays_within_rounding_bounds() {
    // Five characteristics per dosha in the standard bank, at most 2 each.
    for vata in 0..=10 {
        for pitta in 0..=10 {
            for kapha in 0..=10 {
                let result = aggregate(&answers_weighing(vata, pitta, kapha));
                if vata + pitta + kapha == 0 {
                    assert!(result.fallback);
                    continue;
                }

                let distribution = result.distribution;
                assert!(distribution.is_valid());
                assert!(
                    (99..=101).contains(&distribution.total()),
                    "{vata}/{pitta}/{kapha} summed to {}",
                    distribution.total()
                );
            }
        }
    }
}

#[test]
fn every_pairing_has_guidance_for_its_primary() {
    for primary in Dosha::ordered() {
        for secondary in Dosha::ordered() {
            let guidance = guidance_for(crate::workflows::assessment::Constitution {
                primary,
                secondary,
            });
            assert_eq!(guidance.primary, primary);
            assert_ne!(guidance.secondary, primary);
            for (_, items) in guidance.recommendations.sections() {
                assert!(!items.is_empty());
            }
            assert!(!guidance.balance_practices.is_empty());
        }
    }
}
