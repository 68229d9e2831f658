use bevy::prelude::*;

use crate::rules::BattleEvent;

const ATTACK_SOUND: &str = "attack.wav";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Attack,
}

pub trait SoundSink {
    fn play(&mut self, cue: Cue);
}

pub fn cue_for(event: &BattleEvent) -> Option<Cue> {
    match event {
        BattleEvent::PlayerStruck { .. } => Some(Cue::Attack),
        _ => None,
    }
}

pub fn dispatch_cues<'a>(
    events: impl IntoIterator<Item = &'a BattleEvent>,
    sink: &mut impl SoundSink,
) {
    for cue in events.into_iter().filter_map(cue_for) {
        sink.play(cue);
    }
}

/// Plays battle cues through bevy audio.
pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_sounds)
            .add_systems(Update, play_battle_cues);
    }
}

#[derive(Resource)]
struct SoundBank {
    attack: Handle<AudioSource>,
}

fn load_sounds(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(SoundBank {
        attack: asset_server.load(ATTACK_SOUND),
    });
}

struct SpawningSink<'w, 's, 'a> {
    commands: &'a mut Commands<'w, 's>,
    bank: &'a SoundBank,
}

impl SoundSink for SpawningSink<'_, '_, '_> {
    fn play(&mut self, cue: Cue) {
        let handle = match cue {
            Cue::Attack => self.bank.attack.clone(),
        };
        self.commands
            .spawn((AudioPlayer::new(handle), PlaybackSettings::DESPAWN));
    }
}

fn play_battle_cues(
    mut commands: Commands,
    bank: Option<Res<SoundBank>>,
    mut events: EventReader<BattleEvent>,
) {
    let Some(bank) = bank else {
        events.clear();
        return;
    };
    let mut sink = SpawningSink {
        commands: &mut commands,
        bank: &*bank,
    };
    dispatch_cues(events.read(), &mut sink);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Outcome;

    #[derive(Default)]
    struct Recorder(Vec<Cue>);

    impl SoundSink for Recorder {
        fn play(&mut self, cue: Cue) {
            self.0.push(cue);
        }
    }

    #[test]
    fn only_player_strikes_make_noise() {
        let events = [
            BattleEvent::Started,
            BattleEvent::PlayerStruck {
                damage: 7,
                monster_health: 73,
            },
            BattleEvent::MonsterStruck {
                damage: 12,
                player_health: 88,
            },
            BattleEvent::MatchEnded {
                outcome: Outcome::Victory,
            },
        ];
        let mut recorder = Recorder::default();
        dispatch_cues(&events, &mut recorder);
        assert_eq!(vec![Cue::Attack], recorder.0);
    }
}
