//! Game session: owns every simulated entity and runs the per-tick pipeline
//! player -> enemies -> projectiles -> collision, strictly in that order.

use bevy::log::{debug, info};
use bevy::prelude::*;

use crate::combat::{
    DefeatedEnemy, EnemyHit, Explosion, Owner, Projectile, ProjectileId, ShotRequest,
    advance_projectiles, resolve_player_shots,
};
use crate::config::GameConfig;
use crate::enemies::{Archetype, Enemy, EnemyId, initial_roster, update_enemies};
use crate::motion::Facing;
use crate::player::{CommandFrame, DamageSource, InputFrame, Player};
use crate::{GameSet, GameState};

pub mod clock;
pub mod timers;

use clock::SimClock;
use timers::{DeferredAction, DueAction, TimerId, TimerQueue};

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>()
            .init_resource::<Session>()
            .init_resource::<FrameSnapshot>()
            .add_event::<GameEvent>()
            .add_systems(
                Update,
                (apply_session_commands, advance_session, sync_game_state)
                    .chain()
                    .in_set(GameSet::Simulate),
            );
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    NotStarted,
    Playing,
    GameOver,
}

impl From<SessionState> for GameState {
    fn from(state: SessionState) -> Self {
        match state {
            SessionState::NotStarted => GameState::Menu,
            SessionState::Playing => GameState::Playing,
            SessionState::GameOver => GameState::GameOver,
        }
    }
}

/// Things that happened during a tick, for presentation and logging
#[derive(Event, Clone, Debug, PartialEq)]
pub enum GameEvent {
    Shot(Projectile),
    PlayerDamaged { source: DamageSource, health: i32 },
    EnemyHit(EnemyHit),
    EnemyDefeated(DefeatedEnemy),
    Explosion(Explosion),
    GameOver { score: u32 },
    ProjectilesCleared,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerView {
    pub position: Vec3,
    pub facing: Facing,
    pub is_moving: bool,
    pub is_jumping: bool,
    pub is_shooting: bool,
    pub is_invulnerable: bool,
    pub visible: bool,
    pub health: i32,
    pub health_fraction: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnemyView {
    pub id: EnemyId,
    pub position: Vec3,
    pub facing: Facing,
    pub archetype: Archetype,
    pub is_jumping: bool,
    pub is_shooting: bool,
    pub health: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectileView {
    pub id: ProjectileId,
    pub position: Vec3,
    pub direction: Facing,
    pub enemy_owned: bool,
}

/// Read-only picture of the simulation after the latest tick
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct FrameSnapshot {
    pub state: SessionState,
    pub score: u32,
    pub player: Option<PlayerView>,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
}

#[derive(Resource)]
pub struct Session {
    config: GameConfig,
    state: SessionState,
    clock: SimClock,
    timers: TimerQueue,
    score: u32,
    player: Option<Player>,
    enemies: Vec<Enemy>,
    player_shots: Vec<Projectile>,
    enemy_shots: Vec<Projectile>,
    next_projectile_id: u64,
    next_explosion_id: u64,
    blink_timer: Option<TimerId>,
}

impl FromWorld for Session {
    fn from_world(world: &mut World) -> Self {
        let config = world.get_resource::<GameConfig>().cloned().unwrap_or_default();
        Session::new(config)
    }
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            state: SessionState::NotStarted,
            clock: SimClock::default(),
            timers: TimerQueue::default(),
            score: 0,
            player: None,
            enemies: Vec::new(),
            player_shots: Vec::new(),
            enemy_shots: Vec::new(),
            next_projectile_id: 1,
            next_explosion_id: 1,
            blink_timer: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    // === Commands ===

    /// Begin the first play-through. Only valid before anything has started.
    pub fn start(&mut self) -> bool {
        if self.state != SessionState::NotStarted {
            info!("start ignored while {:?}", self.state);
            return false;
        }
        self.reset_for_play();
        info!("session started");
        true
    }

    /// Reset everything and play again
    pub fn restart(&mut self) -> bool {
        if self.state == SessionState::NotStarted {
            info!("restart ignored before the first start");
            return false;
        }
        self.reset_for_play();
        info!("session restarted");
        true
    }

    /// Back to the title screen, dropping all entities and pending timers
    pub fn stop(&mut self) {
        self.timers.advance_generation();
        self.state = SessionState::NotStarted;
        self.score = 0;
        self.player = None;
        self.enemies.clear();
        self.player_shots.clear();
        self.enemy_shots.clear();
        self.blink_timer = None;
        info!("session stopped");
    }

    fn reset_for_play(&mut self) {
        // Anything scheduled for the previous run must not touch the new one
        self.timers.advance_generation();
        debug!("timer generation {}", self.timers.generation());
        self.blink_timer = None;
        self.score = 0;
        self.player = Some(Player::spawn(&self.config.player));
        self.enemies = initial_roster(self.clock.now());
        self.player_shots.clear();
        self.enemy_shots.clear();
        self.state = SessionState::Playing;
    }

    // === Tick ===

    /// Advance the session by `dt` seconds of real time.
    pub fn tick(&mut self, dt: f32, input: &InputFrame) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if self.state == SessionState::NotStarted {
            return events;
        }

        let dt = self.clock.advance(dt);
        let now = self.clock.now();

        self.run_timers(now, &mut events);

        if self.state == SessionState::Playing {
            self.simulate(dt, now, input, &mut events);
        }

        events
    }

    fn run_timers(&mut self, now: f64, events: &mut Vec<GameEvent>) {
        loop {
            let due = self.timers.drain_due(now);
            if due.is_empty() {
                break;
            }

            for DueAction { fire_at, action } in due {
                self.fire(fire_at, action, events);
            }
        }
    }

    fn fire(&mut self, fire_at: f64, action: DeferredAction, events: &mut Vec<GameEvent>) {
        match action {
            DeferredAction::EndShootPulse => {
                if let Some(player) = self.player.as_mut() {
                    player.end_shoot_pulse();
                }
            }
            DeferredAction::EndInvulnerability => {
                if let Some(player) = self.player.as_mut() {
                    player.end_invulnerability();
                }
            }
            DeferredAction::BlinkToggle => {
                let blinking = self.player.as_mut().is_some_and(|player| player.toggle_blink());
                self.blink_timer = blinking.then(|| {
                    self.timers.schedule(
                        fire_at + self.config.player.blink_interval,
                        DeferredAction::BlinkToggle,
                    )
                });
            }
            DeferredAction::ClearProjectiles => {
                self.player_shots.clear();
                self.enemy_shots.clear();
                events.push(GameEvent::ProjectilesCleared);
            }
        }
    }

    fn simulate(&mut self, dt: f32, now: f64, input: &InputFrame, events: &mut Vec<GameEvent>) {
        let Some(player) = self.player.as_mut() else {
            return;
        };

        // 1. Player, judged against last tick's enemies and enemy shots
        let player_tick = player.update(
            input,
            dt,
            &self.enemies,
            &self.enemy_shots,
            &self.config.player,
        );
        let health = player.health.current;
        let dead = player.is_dead();

        let mut spawned_player_shot = None;
        if let Some(request) = player_tick.shot {
            let shot = self.spawn_projectile(request, Owner::Player, now);
            self.score += self.config.scoring.points_per_shot;
            self.timers
                .schedule(now + self.config.player.shoot_pulse, DeferredAction::EndShootPulse);
            events.push(GameEvent::Shot(shot.clone()));
            spawned_player_shot = Some(shot);
        }

        if let Some(source) = player_tick.damage {
            if let DamageSource::Projectile(id) = source {
                self.enemy_shots.retain(|shot| shot.id != id);
            }
            self.start_invulnerability(now);
            events.push(GameEvent::PlayerDamaged { source, health });

            if dead {
                self.player_shots.extend(spawned_player_shot);
                self.enter_game_over(now, events);
                return;
            }
        }

        // 2. Enemies
        let enemy_tick = update_enemies(&self.enemies, dt, now, &self.config.enemy);

        // 3. Projectiles that existed before this tick; fresh shots join afterwards
        self.player_shots = advance_projectiles(&self.player_shots, dt, now, &self.config.projectile);
        self.enemy_shots = advance_projectiles(&self.enemy_shots, dt, now, &self.config.projectile);
        self.player_shots.extend(spawned_player_shot);
        for request in enemy_tick.shots {
            let shot = self.spawn_projectile(request, Owner::Enemy, now);
            events.push(GameEvent::Shot(shot.clone()));
            self.enemy_shots.push(shot);
        }

        // 4. Collision against the moved enemies and shots
        let outcome = resolve_player_shots(
            &enemy_tick.enemies,
            &self.player_shots,
            self.config.scoring.enemy_hit_radius,
            &mut self.next_explosion_id,
        );

        events.extend(outcome.hits.into_iter().map(GameEvent::EnemyHit));
        events.extend(outcome.explosions.into_iter().map(GameEvent::Explosion));
        for defeated in outcome.defeated {
            self.score += self.config.scoring.points_per_kill;
            events.push(GameEvent::EnemyDefeated(defeated));
        }

        self.enemies = outcome.enemies;
        self.player_shots = outcome.player_shots;
    }

    fn spawn_projectile(&mut self, request: ShotRequest, owner: Owner, now: f64) -> Projectile {
        let id = ProjectileId(self.next_projectile_id);
        self.next_projectile_id += 1;
        Projectile::from_request(id, request, owner, now)
    }

    fn start_invulnerability(&mut self, now: f64) {
        let player = &self.config.player;
        self.timers
            .schedule(now + player.invulnerability, DeferredAction::EndInvulnerability);

        if let Some(previous) = self.blink_timer.take() {
            self.timers.cancel(previous);
        }
        self.blink_timer = Some(
            self.timers
                .schedule(now + player.blink_interval, DeferredAction::BlinkToggle),
        );
    }

    fn enter_game_over(&mut self, now: f64, events: &mut Vec<GameEvent>) {
        self.state = SessionState::GameOver;

        // Freeze the final frame with the player shown
        if let Some(timer) = self.blink_timer.take() {
            self.timers.cancel(timer);
        }
        if let Some(player) = self.player.as_mut() {
            player.blink_hidden = false;
        }

        self.timers.schedule(
            now + self.config.session.game_over_cleanup,
            DeferredAction::ClearProjectiles,
        );

        info!("game over, final score {}", self.score);
        events.push(GameEvent::GameOver { score: self.score });
    }

    // === Snapshot ===

    pub fn snapshot(&self) -> FrameSnapshot {
        let now = self.clock.now();

        let player = self.player.as_ref().map(|player| PlayerView {
            position: player.position,
            facing: player.facing,
            is_moving: player.is_moving,
            is_jumping: player.is_jumping,
            is_shooting: player.is_shooting,
            is_invulnerable: player.is_invulnerable,
            visible: !player.blink_hidden,
            health: player.health.current,
            health_fraction: player.health.fraction(),
        });

        let enemies = self
            .enemies
            .iter()
            .map(|enemy| EnemyView {
                id: enemy.id,
                position: enemy.position,
                facing: enemy.direction,
                archetype: enemy.archetype,
                is_jumping: enemy.is_jumping(),
                is_shooting: enemy.is_shooting(now, &self.config.enemy),
                health: enemy.health.current,
            })
            .collect();

        let projectiles = self
            .player_shots
            .iter()
            .chain(self.enemy_shots.iter())
            .map(|shot| ProjectileView {
                id: shot.id,
                position: shot.position,
                direction: shot.direction,
                enemy_owned: shot.is_enemy_owned(),
            })
            .collect();

        FrameSnapshot {
            state: self.state,
            score: self.score,
            player,
            enemies,
            projectiles,
        }
    }
}

// === Systems ===

fn apply_session_commands(commands: Res<CommandFrame>, mut session: ResMut<Session>) {
    if commands.stop && session.state() != SessionState::NotStarted {
        session.stop();
        return;
    }

    if commands.start {
        match session.state() {
            SessionState::NotStarted => {
                session.start();
            }
            SessionState::GameOver => {
                session.restart();
            }
            SessionState::Playing => {}
        }
    }
}

fn advance_session(
    time: Res<Time>,
    input: Res<InputFrame>,
    mut session: ResMut<Session>,
    mut snapshot: ResMut<FrameSnapshot>,
    mut events: EventWriter<GameEvent>,
) {
    for event in session.tick(time.delta_secs(), &input) {
        events.write(event);
    }
    *snapshot = session.snapshot();
}

fn sync_game_state(
    session: Res<Session>,
    current_state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let target = GameState::from(session.state());
    if *current_state.get() != target {
        next_state.set(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn idle() -> InputFrame {
        InputFrame::default()
    }

    fn shoot() -> InputFrame {
        InputFrame {
            shoot: true,
            ..default()
        }
    }

    fn playing() -> Session {
        let mut session = Session::new(GameConfig::default());
        assert!(session.start());
        session
    }

    /// Enemies that stand still, for damage timing tests
    fn frozen_enemies() -> GameConfig {
        let mut config = GameConfig::default();
        config.enemy.patrol_speed = 0.0;
        config
    }

    fn enemy_shot_at(session: &mut Session, position: Vec3) {
        let request = ShotRequest {
            position,
            direction: Facing::Left,
        };
        let now = session.clock.now();
        let shot = session.spawn_projectile(request, Owner::Enemy, now);
        session.enemy_shots.push(shot);
    }

    // ==================== Lifecycle Tests ====================

    #[test]
    fn test_not_started_has_no_entities_and_ignores_ticks() {
        let mut session = Session::new(GameConfig::default());

        let events = session.tick(1.0, &shoot());

        assert!(events.is_empty());
        assert_eq!(session.state(), SessionState::NotStarted);
        assert!(session.player.as_ref().is_none());
        assert!(session.enemies.is_empty());
        assert_eq!(session.clock.now(), 0.0);
    }

    #[test]
    fn test_start_installs_roster() {
        let session = playing();

        assert_eq!(session.state(), SessionState::Playing);
        assert_eq!(session.score, 0);
        assert_eq!(session.player.as_ref().map(|p| p.health.current), Some(3));
        assert_eq!(session.enemies, initial_roster(0.0));
        assert!(session.player_shots.is_empty());
        assert!(session.enemy_shots.is_empty());
    }

    #[test]
    fn test_start_only_from_not_started() {
        let mut session = playing();

        assert!(!session.start());
        assert!(!Session::new(GameConfig::default()).restart());
    }

    #[test]
    fn test_stop_returns_to_title_and_drops_timers() {
        let mut session = playing();
        session.tick(0.016, &shoot());
        assert!(session.timers.pending() > 0);

        session.stop();

        assert_eq!(session.state(), SessionState::NotStarted);
        assert!(session.player.as_ref().is_none());
        assert_eq!(session.timers.pending(), 0);
        assert!(session.tick(5.0, &idle()).is_empty());
    }

    // ==================== Scenario Tests ====================

    #[test]
    fn test_shoot_spawns_projectile_and_scores() {
        let mut session = playing();

        let events = session.tick(0.016, &shoot());

        assert_eq!(session.player_shots.len(), 1);
        let shot = &session.player_shots[0];
        assert!(approx_eq(shot.position.x, 0.5));
        assert!(approx_eq(shot.position.y, 1.0));
        assert!(approx_eq(shot.position.z, 0.0));
        assert_eq!(shot.direction, Facing::Right);
        assert_eq!(session.score, 1);
        assert!(matches!(events[0], GameEvent::Shot(_)));
    }

    #[test]
    fn test_shoot_pulse_ends_after_200ms() {
        let mut session = playing();
        session.tick(0.0, &shoot());
        assert!(session.player.as_ref().is_some_and(|p| p.is_shooting));

        session.tick(0.19, &idle());
        assert!(session.player.as_ref().is_some_and(|p| p.is_shooting));

        session.tick(0.02, &idle());
        assert!(session.player.as_ref().is_some_and(|p| !p.is_shooting));
    }

    #[test]
    fn test_projectile_hit_defeats_walker() {
        let mut session = playing();
        let walker = Enemy::walker(EnemyId(1), Vec3::new(3.0, 1.0, 0.0), Facing::Left, 0.0);
        session.enemies = vec![walker];
        let request = ShotRequest {
            position: Vec3::new(2.5, 1.0, 0.0),
            direction: Facing::Right,
        };
        let shot = session.spawn_projectile(request, Owner::Player, 0.0);
        session.player_shots.push(shot);

        let events = session.tick(0.0, &idle());

        assert!(session.enemies.is_empty());
        assert!(session.player_shots.is_empty());
        assert_eq!(session.score, 10);
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::Explosion(explosion) if explosion.position == Vec3::new(3.0, 1.0, 0.0)
        )));
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::EnemyDefeated(defeated) if defeated.id == EnemyId(1)
        )));
    }

    #[test]
    fn test_last_health_lost_ends_game_same_tick() {
        let mut session = playing();
        if let Some(player) = session.player.as_mut() {
            player.health.current = 1;
        }
        enemy_shot_at(&mut session, Vec3::new(0.4, 1.0, 0.0));

        let events = session.tick(0.0, &idle());

        assert_eq!(session.state(), SessionState::GameOver);
        assert_eq!(session.player.as_ref().map(|p| p.health.current), Some(0));
        assert!(events.contains(&GameEvent::GameOver { score: 0 }));
        assert!(session.timers.is_pending(DeferredAction::ClearProjectiles));
    }

    #[test]
    fn test_shooter_fires_on_cooldown() {
        let mut session = playing();

        session.tick(2.9, &idle());
        assert!(session.enemy_shots.is_empty());

        // The shot leaves from where the shooter stood when the tick began
        let shooter = session
            .enemies
            .iter()
            .find(|e| matches!(e.archetype, Archetype::Shooter { .. }))
            .map(|e| e.position);

        let events = session.tick(0.2, &idle());
        assert_eq!(session.enemy_shots.len(), 1);
        assert_eq!(Some(session.enemy_shots[0].position), shooter);
        assert!(session.enemy_shots[0].is_enemy_owned());
        assert!(events.iter().any(|e| matches!(e, GameEvent::Shot(shot) if shot.is_enemy_owned())));
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut session = playing();
        session.tick(0.0, &shoot());
        session.score = 42;
        session.state = SessionState::GameOver;
        session.enemies.clear();

        assert!(session.restart());

        assert_eq!(session.state(), SessionState::Playing);
        assert_eq!(session.score, 0);
        assert_eq!(session.player.as_ref().map(|p| p.health.current), Some(3));
        assert_eq!(session.enemies, initial_roster(session.clock.now()));
        assert!(session.player_shots.is_empty());
        assert_eq!(session.timers.pending(), 0);
    }

    // ==================== Damage Window Tests ====================

    #[test]
    fn test_invulnerability_blocks_for_full_window() {
        let mut session = Session::new(frozen_enemies());
        session.start();
        session.enemies = vec![Enemy::walker(EnemyId(9), Vec3::new(0.5, 1.0, 0.0), Facing::Left, 0.0)];

        session.tick(0.0, &idle());
        assert_eq!(session.player.as_ref().map(|p| p.health.current), Some(2));

        session.tick(1.0, &idle());
        session.tick(0.49, &idle());
        assert_eq!(session.player.as_ref().map(|p| p.health.current), Some(2));

        session.tick(0.02, &idle());
        assert_eq!(session.player.as_ref().map(|p| p.health.current), Some(1));
    }

    #[test]
    fn test_enemy_shot_consumed_on_hit() {
        let mut session = playing();
        enemy_shot_at(&mut session, Vec3::new(0.2, 1.0, 0.0));
        enemy_shot_at(&mut session, Vec3::new(-0.2, 1.0, 0.0));

        let events = session.tick(0.0, &idle());

        assert_eq!(session.enemy_shots.len(), 1);
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::PlayerDamaged { source: DamageSource::Projectile(_), health: 2 }
        )));
    }

    #[test]
    fn test_blink_toggles_during_window() {
        let mut session = Session::new(frozen_enemies());
        session.start();
        session.enemies.clear();
        enemy_shot_at(&mut session, Vec3::new(0.0, 1.0, 0.0));
        session.tick(0.0, &idle());
        assert!(session.snapshot().player.is_some_and(|p| p.visible));

        session.tick(0.16, &idle());
        assert!(session.snapshot().player.is_some_and(|p| !p.visible));

        session.tick(0.15, &idle());
        assert!(session.snapshot().player.is_some_and(|p| p.visible));

        session.tick(1.3, &idle());
        let view = session.snapshot().player.expect("player present");
        assert!(view.visible);
        assert!(!view.is_invulnerable);
    }

    // ==================== Game Over Tests ====================

    #[test]
    fn test_game_over_freezes_simulation() {
        let mut session = playing();
        if let Some(player) = session.player.as_mut() {
            player.health.current = 1;
        }
        enemy_shot_at(&mut session, Vec3::new(0.0, 1.0, 0.0));
        session.tick(0.0, &idle());
        let enemies_before = session.enemies.to_vec();

        let walk = InputFrame {
            right: true,
            ..default()
        };
        session.tick(0.5, &walk);

        assert!(session.player.as_ref().is_some_and(|p| approx_eq(p.position.x, 0.0)));
        assert_eq!(session.enemies, enemies_before.as_slice());
    }

    #[test]
    fn test_game_over_clears_projectiles_after_delay() {
        let mut session = playing();
        if let Some(player) = session.player.as_mut() {
            player.health.current = 1;
        }
        enemy_shot_at(&mut session, Vec3::new(0.0, 1.0, 0.0));
        enemy_shot_at(&mut session, Vec3::new(-6.0, 1.0, 0.0));
        session.tick(0.0, &idle());
        assert_eq!(session.enemy_shots.len(), 1);

        session.tick(1.9, &idle());
        assert_eq!(session.enemy_shots.len(), 1);

        let events = session.tick(0.2, &idle());
        assert!(session.enemy_shots.is_empty());
        assert!(events.contains(&GameEvent::ProjectilesCleared));
    }

    #[test]
    fn test_stale_cleanup_does_not_touch_new_run() {
        let mut session = Session::new(frozen_enemies());
        session.start();
        if let Some(player) = session.player.as_mut() {
            player.health.current = 1;
        }
        enemy_shot_at(&mut session, Vec3::new(0.0, 1.0, 0.0));
        session.tick(0.0, &idle());
        assert_eq!(session.state(), SessionState::GameOver);

        session.tick(0.5, &idle());
        session.restart();
        session.enemies.clear();
        session.tick(0.0, &shoot());
        assert_eq!(session.player_shots.len(), 1);

        // Past the old cleanup deadline
        let events = session.tick(1.6, &idle());

        assert_eq!(session.player_shots.len(), 1);
        assert!(!events.contains(&GameEvent::ProjectilesCleared));
    }

    #[test]
    fn test_health_never_increases_while_playing() {
        let mut session = playing();
        let mut last = 3;

        for _ in 0..600 {
            session.tick(0.016, &shoot());
            let Some(health) = session.player.as_ref().map(|p| p.health.current) else {
                break;
            };
            assert!(health <= last);
            assert!(health >= 0);
            last = health;
        }
    }

    // ==================== Snapshot Tests ====================

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut session = playing();
        session.tick(0.016, &shoot());

        let snapshot = session.snapshot();

        assert_eq!(snapshot.state, SessionState::Playing);
        assert_eq!(snapshot.score, 1);
        assert_eq!(snapshot.enemies.len(), 3);
        assert_eq!(snapshot.projectiles.len(), 1);
        assert!(!snapshot.projectiles[0].enemy_owned);
        assert_eq!(snapshot.player.map(|p| p.health), Some(3));
    }

    #[test]
    fn test_game_state_mapping() {
        assert_eq!(GameState::from(SessionState::NotStarted), GameState::Menu);
        assert_eq!(GameState::from(SessionState::Playing), GameState::Playing);
        assert_eq!(GameState::from(SessionState::GameOver), GameState::GameOver);
    }
}
