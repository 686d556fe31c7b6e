//! Action engine driven through the scene

use approx::assert_relative_eq;

use super::{cube, run, scene};
use crate::action::{Action, ActionKind, ActionTag, Interpolation};
use crate::foundation::math::Vec3;

#[test]
fn test_move_to_lands_exactly_on_target() {
    let mut scene = scene();
    let actor = cube(&mut scene);
    let target = Vec3::new(10.0, -3.0, 7.0);
    scene
        .add_action(actor, Action::move_to(target, 1.0).with_interpolation(Interpolation::Smooth))
        .expect("attach");

    run(&mut scene, 0.25, 3);
    let midway = scene.actor(actor).expect("actor").transform().position();
    assert!(midway.x > 0.0 && midway.x < 10.0);

    run(&mut scene, 0.25, 1);
    let actor = scene.actor(actor).expect("actor");
    assert_eq!(actor.transform().position(), target);
    assert!(actor.actions().is_empty());
}

#[test]
fn test_sequence_returns_to_origin_after_two_seconds() {
    let mut scene = scene();
    let actor = cube(&mut scene);
    scene
        .add_action(
            actor,
            Action::sequence([
                Action::move_by(Vec3::new(5.0, 0.0, 0.0), 1.0),
                Action::move_by(Vec3::new(-5.0, 0.0, 0.0), 1.0),
            ]),
        )
        .expect("attach");

    run(&mut scene, 0.25, 4);
    assert_eq!(scene.actor(actor).expect("actor").transform().position(), Vec3::new(5.0, 0.0, 0.0));

    run(&mut scene, 0.25, 4);
    let actor = scene.actor(actor).expect("actor");
    assert_eq!(actor.transform().position(), Vec3::zeros());
    assert!(actor.actions().is_empty());
}

#[test]
fn test_parallel_completes_with_its_longest_child() {
    let mut scene = scene();
    let actor = cube(&mut scene);
    scene
        .add_action(
            actor,
            Action::parallel([
                Action::move_by(Vec3::new(1.0, 0.0, 0.0), 1.0),
                Action::scale_to(Vec3::repeat(2.0), 2.0),
            ]),
        )
        .expect("attach");

    run(&mut scene, 0.25, 4);
    let node = scene.actor(actor).expect("actor");
    assert_eq!(node.transform().position(), Vec3::new(1.0, 0.0, 0.0));
    assert_relative_eq!(node.transform().scale(), Vec3::repeat(1.5), epsilon = 1e-5);
    assert_eq!(node.actions().len(), 1);

    run(&mut scene, 0.25, 4);
    let node = scene.actor(actor).expect("actor");
    assert_eq!(node.transform().scale(), Vec3::repeat(2.0));
    assert!(node.actions().is_empty());
}

#[test]
fn test_repeat_runs_child_three_times() {
    let mut scene = scene();
    let actor = cube(&mut scene);
    scene
        .add_action(actor, Action::repeat(3, Action::move_by(Vec3::new(1.0, 0.0, 0.0), 0.5)))
        .expect("attach");

    run(&mut scene, 0.5, 2);
    assert_eq!(scene.actor(actor).expect("actor").transform().position(), Vec3::new(2.0, 0.0, 0.0));
    assert_eq!(scene.actor(actor).expect("actor").actions().len(), 1);

    run(&mut scene, 0.5, 1);
    let node = scene.actor(actor).expect("actor");
    assert_eq!(node.transform().position(), Vec3::new(3.0, 0.0, 0.0));
    assert!(node.actions().is_empty());
}

#[test]
fn test_forever_never_completes() {
    let mut scene = scene();
    let actor = cube(&mut scene);
    let id = scene
        .add_action(actor, Action::forever(Action::rotate_by(90.0, 0.25)))
        .expect("attach");

    run(&mut scene, 0.25, 40);
    assert!(scene.is_action_attached(id));
    assert_eq!(scene.actor(actor).expect("actor").transform().rotation(), 3600.0);
}

#[test]
fn test_finished_forever_stops_after_current_pass() {
    let mut scene = scene();
    let actor = cube(&mut scene);
    let id = scene
        .add_action(actor, Action::forever(Action::move_by(Vec3::new(1.0, 0.0, 0.0), 0.5)))
        .expect("attach");

    run(&mut scene, 0.25, 1);
    match scene.action_mut(id).expect("idle").kind_mut() {
        ActionKind::Repeat(repeat) => repeat.finish(),
        other => panic!("expected a repeat, got {other:?}"),
    }

    run(&mut scene, 0.25, 4);
    assert!(!scene.is_action_attached(id));
    assert_relative_eq!(
        scene.actor(actor).expect("actor").transform().position(),
        Vec3::new(1.0, 0.0, 0.0),
        epsilon = 1e-6
    );
}

#[test]
fn test_run_callback_removes_idle_sibling() {
    let mut scene = scene();
    let actor = cube(&mut scene);
    let id = scene
        .add_action(actor, Action::forever(Action::move_by(Vec3::new(1.0, 0.0, 0.0), 0.5)))
        .expect("attach");

    run(&mut scene, 0.25, 1);
    // Not running right now, so it can be reached through the scene
    assert!(scene.action(id).is_some());
    let remover = Action::run(move |ctx| {
        let actor = ctx.actor();
        ctx.scene_mut().remove_action(actor, id);
    });
    scene.add_action(actor, Action::delay_then(0.25, remover)).expect("attach");

    run(&mut scene, 0.25, 1);
    assert!(!scene.is_action_attached(id));
    assert_eq!(scene.actor(actor).expect("actor").transform().position(), Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn test_instant_tween_completes_on_first_step() {
    let mut scene = scene();
    let actor = cube(&mut scene);
    scene.add_action(actor, Action::rotate_to(45.0, 0.0)).expect("attach");
    scene.add_action(actor, Action::scale_by(Vec3::repeat(1.0), -1.0)).expect("attach");

    run(&mut scene, 0.016, 1);
    let node = scene.actor(actor).expect("actor");
    assert_eq!(node.transform().rotation(), 45.0);
    assert_eq!(node.transform().scale(), Vec3::repeat(2.0));
    assert!(node.actions().is_empty());
}

#[test]
fn test_relative_tweens_compose() {
    let mut scene = scene();
    let actor = cube(&mut scene);
    scene.add_action(actor, Action::move_by(Vec3::new(4.0, 0.0, 0.0), 1.0)).expect("attach");
    scene.add_action(actor, Action::move_by(Vec3::new(2.0, 0.0, 0.0), 0.5)).expect("attach");

    run(&mut scene, 0.25, 4);
    assert_relative_eq!(
        scene.actor(actor).expect("actor").transform().position(),
        Vec3::new(6.0, 0.0, 0.0),
        epsilon = 1e-5
    );
}

#[test]
fn test_pooled_action_returns_reset_after_completion() {
    let mut scene = scene();
    let actor = cube(&mut scene);
    let action = scene.pool_mut().move_to(Vec3::new(3.0, 0.0, 0.0), 0.5);
    scene.add_action(actor, action).expect("attach");

    run(&mut scene, 0.5, 1);
    assert_eq!(scene.pool().free_count(ActionTag::MoveTo), 1);

    let reused = scene.pool_mut().obtain(ActionTag::MoveTo);
    assert!(reused.is_pooled());
    match reused.kind() {
        ActionKind::MoveTo(tween) => {
            assert_eq!(tween.end, Vec3::zeros());
            assert_eq!(tween.start, Vec3::zeros());
            assert_eq!(tween.timing.time(), 0.0);
        }
        other => panic!("unexpected kind {other:?}"),
    }
}

#[test]
fn test_action_removing_itself_does_not_skip_next() {
    let mut scene = scene();
    let actor = cube(&mut scene);
    let looping = Action::forever(Action::run(|ctx| {
        let (actor, id) = (ctx.actor(), ctx.running());
        ctx.scene_mut().remove_action(actor, id);
    }));
    let looping = scene.add_action(actor, looping).expect("attach");
    scene.add_action(actor, Action::move_by(Vec3::new(1.0, 0.0, 0.0), 0.25)).expect("attach");

    run(&mut scene, 0.25, 1);
    let node = scene.actor(actor).expect("actor");
    assert!(!scene.is_action_attached(looping));
    assert_eq!(node.transform().position(), Vec3::new(1.0, 0.0, 0.0));
    assert!(node.actions().is_empty());
}

#[test]
fn test_action_removing_earlier_sibling_does_not_skip_next() {
    let mut scene = scene();
    let actor = cube(&mut scene);
    let first = scene
        .add_action(actor, Action::move_by(Vec3::new(1.0, 0.0, 0.0), 1.0))
        .expect("attach");
    scene.add_action(actor, Action::remove_action(first)).expect("attach");
    scene.add_action(actor, Action::move_by(Vec3::new(0.0, 1.0, 0.0), 0.25)).expect("attach");

    run(&mut scene, 0.25, 1);
    let node = scene.actor(actor).expect("actor");
    assert!(!scene.is_action_attached(first));
    assert!(node.actions().is_empty());
    assert_relative_eq!(node.transform().position(), Vec3::new(0.25, 1.0, 0.0), epsilon = 1e-6);
}

#[test]
fn test_action_removing_sibling_then_itself_does_not_skip_next() {
    let mut scene = scene();
    let actor = cube(&mut scene);
    let first = scene.add_action(actor, Action::delay(10.0)).expect("attach");
    let cleanup = Action::forever(Action::run(move |ctx| {
        let (actor, running) = (ctx.actor(), ctx.running());
        ctx.scene_mut().remove_action(actor, first);
        ctx.scene_mut().remove_action(actor, running);
    }));
    let cleanup = scene.add_action(actor, cleanup).expect("attach");
    scene.add_action(actor, Action::move_to(Vec3::new(1.0, 0.0, 0.0), 0.0)).expect("attach");

    run(&mut scene, 0.25, 1);
    let node = scene.actor(actor).expect("actor");
    assert!(!scene.is_action_attached(first));
    assert!(!scene.is_action_attached(cleanup));
    assert!(node.actions().is_empty());
    assert_eq!(node.transform().position(), Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn test_detached_running_pooled_wrapper_is_released_once() {
    let mut scene = scene();
    let actor = cube(&mut scene);
    let inner = scene.pool_mut().run(|ctx| {
        let (actor, id) = (ctx.actor(), ctx.running());
        ctx.scene_mut().remove_action(actor, id);
    });
    let wrapper = scene.pool_mut().time_scale(1.0, inner);
    scene.add_action(actor, wrapper).expect("attach");

    run(&mut scene, 0.1, 1);
    assert_eq!(scene.pool().free_count(ActionTag::TimeScale), 1);
    assert_eq!(scene.pool().free_count(ActionTag::Run), 1);
}

#[test]
fn test_after_waits_for_earlier_actions() {
    let mut scene = scene();
    let actor = cube(&mut scene);
    scene.add_action(actor, Action::move_by(Vec3::new(1.0, 0.0, 0.0), 0.5)).expect("attach");
    scene.add_action(actor, Action::delay(1.0)).expect("attach");
    scene.add_action(actor, Action::after(Action::hide())).expect("attach");
    // Attached later, not waited for
    scene.add_action(actor, Action::delay(5.0)).expect("attach");

    run(&mut scene, 0.5, 1);
    assert!(scene.actor(actor).expect("actor").is_visible());

    run(&mut scene, 0.5, 1);
    let node = scene.actor(actor).expect("actor");
    assert!(!node.is_visible());
    assert_eq!(node.actions().len(), 1);
}

#[test]
fn test_time_scale_speeds_up_child() {
    let mut scene = scene();
    let actor = cube(&mut scene);
    scene
        .add_action(actor, Action::time_scale(2.0, Action::move_to(Vec3::new(4.0, 0.0, 0.0), 1.0)))
        .expect("attach");

    run(&mut scene, 0.25, 1);
    assert_relative_eq!(
        scene.actor(actor).expect("actor").transform().position(),
        Vec3::new(2.0, 0.0, 0.0),
        epsilon = 1e-6
    );
    run(&mut scene, 0.25, 1);
    let node = scene.actor(actor).expect("actor");
    assert_eq!(node.transform().position(), Vec3::new(4.0, 0.0, 0.0));
    assert!(node.actions().is_empty());
}

#[test]
fn test_delay_passes_leftover_time_on() {
    let mut scene = scene();
    let actor = cube(&mut scene);
    scene
        .add_action(actor, Action::delay_then(0.5, Action::move_by(Vec3::new(10.0, 0.0, 0.0), 1.0)))
        .expect("attach");

    run(&mut scene, 0.75, 1);
    assert_relative_eq!(
        scene.actor(actor).expect("actor").transform().position(),
        Vec3::new(2.5, 0.0, 0.0),
        epsilon = 1e-5
    );
}

#[test]
fn test_hidden_actor_keeps_acting() {
    let mut scene = scene();
    let actor = cube(&mut scene);
    scene.actor_mut(actor).expect("actor").set_visible(false);
    scene.add_action(actor, Action::move_to(Vec3::new(0.0, 2.0, 0.0), 0.5)).expect("attach");

    run(&mut scene, 0.25, 2);
    assert_eq!(scene.actor(actor).expect("actor").transform().position(), Vec3::new(0.0, 2.0, 0.0));
}

#[test]
fn test_add_action_to_other_actor() {
    let mut scene = scene();
    let source = cube(&mut scene);
    let target = cube(&mut scene);
    scene
        .add_action(source, Action::add_action_to(target, Action::move_to(Vec3::x(), 0.0)))
        .expect("attach");

    run(&mut scene, 0.1, 1);
    // The target is visited after the source in the same pass
    assert_eq!(scene.actor(target).expect("target").transform().position(), Vec3::x());
    assert!(scene.actor(source).expect("source").actions().is_empty());
}

#[test]
fn test_remove_actor_action_detaches_and_unfocuses() {
    let mut scene = scene();
    let actor = cube(&mut scene);
    scene.set_keyboard_focus(Some(actor)).expect("focus");
    scene
        .add_action(actor, Action::sequence([Action::delay(0.25), Action::remove_actor()]))
        .expect("attach");

    run(&mut scene, 0.25, 2);
    let node = scene.actor(actor).expect("actor");
    assert!(node.parent().is_none());
    assert!(!node.is_in_scene());
    assert_eq!(scene.keyboard_focus(), None);
}

#[test]
fn test_update_clamps_large_deltas() {
    let mut scene = scene();
    let actor = cube(&mut scene);
    scene.add_action(actor, Action::move_by(Vec3::new(30.0, 0.0, 0.0), 1.0)).expect("attach");

    let used = scene.update_clamped(5.0);
    assert_relative_eq!(used, 1.0 / 30.0);
    assert_relative_eq!(
        scene.actor(actor).expect("actor").transform().position(),
        Vec3::new(1.0, 0.0, 0.0),
        epsilon = 1e-4
    );
}
