use std::sync::Arc;

use code_master::{
    Advance, Grade, Phase, QuestionBank, QuizSession, SessionError, Track, UnknownTrackError,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bank() -> Arc<QuestionBank> {
    Arc::new(QuestionBank::bundled().unwrap())
}

fn correct_index(session: &QuizSession) -> usize {
    session.current_question().unwrap().correct_index()
}

fn wrong_index(session: &QuizSession) -> usize {
    (correct_index(session) + 1) % 4
}

#[test]
fn every_track_has_questions_and_unknown_ids_fail() {
    let bank = bank();
    for track in Track::ALL {
        assert!(!bank.questions_for(track).unwrap().is_empty());
        assert!(!bank.questions_for_id(track.id()).unwrap().is_empty());
    }
    assert_eq!(
        bank.questions_for_id("kotlin").unwrap_err(),
        UnknownTrackError("kotlin".to_string())
    );
}

#[test]
fn start_resets_counters_and_draws_from_track() {
    let bank = bank();
    for (seed, track) in Track::ALL.into_iter().enumerate() {
        let mut session = QuizSession::seeded(Arc::clone(&bank), seed as u64);
        session.start(track).unwrap();

        assert_eq!(session.score(), 0);
        assert_eq!(session.answered_count(), 0);
        assert!(session.history().is_empty());
        assert_eq!(session.phase(), Phase::InProgress);

        let question = session.current_question().unwrap();
        assert_eq!(question.track(), track);
        assert!(bank.questions_for(track).unwrap().contains(question));
    }
}

#[test]
fn counters_stay_ordered_across_random_play() {
    let mut rng = StdRng::seed_from_u64(2024);

    for seed in 0..20 {
        let mut session = QuizSession::seeded(bank(), seed);
        session.start(Track::ALL[seed as usize % 4]).unwrap();

        while session.phase() != Phase::Complete {
            let expected_gain = {
                let selected = rng.random_range(0..4);
                let correct = correct_index(&session);
                let before = session.score();
                let outcome = session.answer(selected).unwrap();
                assert_eq!(outcome.correct, selected == correct);
                assert_eq!(outcome.correct_index, correct);
                assert!(!outcome.explanation.is_empty());
                session.score() - before
            };
            assert!(expected_gain <= 1);
            assert!(session.score() <= session.answered_count());
            assert!(session.answered_count() <= session.max_questions());
            assert_eq!(session.history().len(), session.answered_count());
            assert_eq!(
                session.history().iter().filter(|correct| **correct).count(),
                session.score()
            );

            session.advance().unwrap();
        }
    }
}

#[test]
fn correct_index_always_scores_and_others_never_do() {
    let mut session = QuizSession::seeded(bank(), 5).with_max_questions(40);
    session.start(Track::JavaScript).unwrap();

    for round in 0..40 {
        let before = session.score();
        if round % 2 == 0 {
            let index = correct_index(&session);
            assert!(session.answer(index).unwrap().correct);
            assert_eq!(session.score(), before + 1);
        } else {
            let index = wrong_index(&session);
            assert!(!session.answer(index).unwrap().correct);
            assert_eq!(session.score(), before);
        }
        session.advance().unwrap();
    }
    assert_eq!(session.score(), 20);
}

#[test]
fn session_completes_after_max_questions() {
    let mut session = QuizSession::seeded(bank(), 9);
    session.start(Track::Cpp).unwrap();

    for cycle in 0..10 {
        assert!(!session.is_complete());
        assert_eq!(session.final_grade(), Err(SessionError::NotComplete));
        let index = correct_index(&session);
        session.answer(index).unwrap();
        let advance = session.advance().unwrap();
        if cycle < 9 {
            assert_eq!(advance, Advance::Continue);
        } else {
            assert_eq!(
                advance,
                Advance::Complete {
                    score: 10,
                    answered: 10
                }
            );
        }
    }

    assert!(session.is_complete());
    assert_eq!(session.phase(), Phase::Complete);
    assert_eq!(session.answer(0), Err(SessionError::Complete));
    assert_eq!(session.final_grade(), Ok(Grade::Excellent));
}

fn play(correct_answers: usize) -> Grade {
    let mut session = QuizSession::seeded(bank(), correct_answers as u64);
    session.start(Track::React).unwrap();
    for cycle in 0..10 {
        let index = if cycle < correct_answers {
            correct_index(&session)
        } else {
            wrong_index(&session)
        };
        session.answer(index).unwrap();
        session.advance().unwrap();
    }
    assert_eq!(session.score(), correct_answers);
    session.final_grade().unwrap()
}

#[test]
fn final_grade_tiers() {
    assert_eq!(play(9), Grade::Excellent);
    assert_eq!(play(6), Grade::Good);
    assert_eq!(play(5), Grade::NeedsPractice);
}

#[test]
fn python_scenario_ends_needing_practice() {
    let mut session = QuizSession::seeded(bank(), 77);
    let question = session.start(Track::Python).unwrap();
    assert_eq!(question.track(), Track::Python);

    let index = correct_index(&session);
    let outcome = session.answer(index).unwrap();
    assert!(outcome.correct);
    assert_eq!(session.score(), 1);
    assert_eq!(session.answered_count(), 1);

    for _ in 0..9 {
        assert_eq!(session.advance(), Ok(Advance::Continue));
        let index = wrong_index(&session);
        assert!(!session.answer(index).unwrap().correct);
    }
    assert_eq!(
        session.advance(),
        Ok(Advance::Complete {
            score: 1,
            answered: 10
        })
    );

    assert_eq!(session.score(), 1);
    assert_eq!(session.answered_count(), 10);
    assert_eq!(session.final_grade(), Ok(Grade::NeedsPractice));
    assert_eq!(session.final_grade().unwrap().to_string(), "needs practice");
}

#[test]
fn restart_after_completion_resets_state() {
    let mut session = QuizSession::seeded(bank(), 3).with_max_questions(2);
    session.start(Track::Python).unwrap();
    for _ in 0..2 {
        let index = correct_index(&session);
        session.answer(index).unwrap();
        session.advance().unwrap();
    }
    assert_eq!(session.phase(), Phase::Complete);

    session.start(Track::React).unwrap();
    assert_eq!(session.phase(), Phase::InProgress);
    assert_eq!(session.track(), Some(Track::React));
    assert_eq!(session.score(), 0);
    assert_eq!(session.answered_count(), 0);
    assert!(session.history().is_empty());
    assert_eq!(session.current_question().unwrap().track(), Track::React);

    session.restart().unwrap();
    assert_eq!(session.track(), Some(Track::React));
    assert_eq!(session.answered_count(), 0);
}
