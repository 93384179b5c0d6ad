// The "2 plus 2" lesson state machine on its own

use abacus_tty::lesson::{CheckOutcome, Lesson, LessonState, SCRIPT_ID};

#[test]
fn test_full_walkthrough() {
    let mut lesson = Lesson::new();
    assert_eq!(lesson.script_id(), None);

    lesson.start();
    assert_eq!(lesson.state(), LessonState::AwaitClear);
    assert_eq!(lesson.script_id(), Some(SCRIPT_ID));

    let script: [([u8; 4], LessonState); 5] = [
        ([0, 0, 0, 0], LessonState::AwaitTwo),
        ([1, 0, 0, 0], LessonState::AwaitTwo),
        ([2, 0, 0, 0], LessonState::AwaitFour),
        ([4, 0, 0, 0], LessonState::Complete),
        ([4, 0, 0, 0], LessonState::Idle),
    ];
    for (counts, expected) in script {
        lesson.check(&counts);
        assert_eq!(lesson.state(), expected, "after checking {:?}", counts);
    }
}

#[test]
fn test_every_failure_has_a_prompt() {
    let wrong = [5, 0, 0, 0];
    let mut lesson = Lesson::new();
    lesson.start();

    let mut prompts = Vec::new();
    for ready in [[0, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0]] {
        match lesson.check(&wrong) {
            CheckOutcome::Retry { message } => prompts.push(message),
            other => panic!("expected a corrective prompt, got {:?}", other),
        }
        lesson.check(&ready);
    }

    assert_eq!(prompts.len(), 3);
    assert!(prompts.iter().all(|p| !p.is_empty()));
    assert_eq!(lesson.state(), LessonState::Complete);
}

#[test]
fn test_restart_mid_lesson() {
    let mut lesson = Lesson::new();
    lesson.start();
    lesson.check(&[0, 0, 0, 0]);
    lesson.check(&[2, 0, 0, 0]);

    lesson.start();
    assert_eq!(lesson.state(), LessonState::AwaitClear);
}

#[test]
fn test_each_active_step_has_instruction() {
    for state in [
        LessonState::AwaitClear,
        LessonState::AwaitTwo,
        LessonState::AwaitFour,
        LessonState::Complete,
    ] {
        assert!(state.instruction().is_some(), "{:?}", state);
        assert!(state.is_active());
    }
    assert!(!LessonState::Idle.is_active());
}
