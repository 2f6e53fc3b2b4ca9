//! Systems driving the per-die roll state.
use bevy::prelude::*;

use crate::utils::objects::{Die, DieRoll, DieSettings, RandomGen, RollRequested, RollSettled};
use die_core::geometry::{to_dquat, to_quat};

/// Starts a roll for every requested die that is at rest.
pub fn start_requested_rolls(
    mut requests: MessageReader<RollRequested>,
    settings: Res<DieSettings>,
    mut random_gen: ResMut<RandomGen>,
    mut dice: Query<(&Die, &Transform, &mut DieRoll)>,
) {
    let params = settings.0.roll_params();
    for request in requests.read() {
        let Ok((die, transform, mut roll)) = dice.get_mut(request.die) else {
            warn!("Roll requested for {:?}, which is not a die", request.die);
            continue;
        };
        roll.0.begin(
            to_dquat(transform.rotation),
            &die.faces,
            &params,
            &mut random_gen.random_gen,
        );
    }
}

/// Advances spinning dice and reports the ones that came to rest.
pub fn animate_rolls(
    time: Res<Time>,
    mut dice: Query<(Entity, &Die, &mut Transform, &mut DieRoll)>,
    mut settled: MessageWriter<RollSettled>,
) {
    for (entity, die, mut transform, mut roll) in &mut dice {
        let Some(step) = roll.0.advance(time.delta_secs_f64()) else {
            continue;
        };
        transform.rotation = to_quat(step.orientation);

        let Some(face_index) = step.settled else {
            continue;
        };
        let value = die.faces.face(face_index).map_or(face_index as u32 + 1, |f| f.number());
        info!("Die {:?} settled showing {}", entity, value);
        settled.write(RollSettled {
            die: entity,
            face_index,
            value,
        });
    }
}
