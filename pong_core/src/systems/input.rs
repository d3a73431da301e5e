use hecs::World;

use crate::{InputIntents, Paddle, PaddleIntent};

/// Translate the host's boolean intents into per-paddle directions
pub fn apply_intents(world: &mut World, intents: &InputIntents) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        intent.dir = intents.dir(paddle.side);
    }
}
