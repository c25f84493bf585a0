// Animation clip timing
//
// The simulation only cares about clip timing: the attack clip decides when
// a chakram leaves the hand and when the throw is over. Renderers read the
// same player to pick sprite frames.

use std::collections::HashMap;

/// A single animation clip
#[derive(Debug, Clone)]
pub struct AnimationClip {
    /// Name of the animation (e.g., "idle", "run", "attack")
    pub name: String,
    /// Number of frames in the animation
    pub frame_count: usize,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    /// Whether the animation loops
    pub looping: bool,
}

impl AnimationClip {
    /// Create a new animation clip
    pub fn new(name: &str, frame_count: usize, fps: f32, looping: bool) -> Self {
        Self {
            name: name.to_string(),
            frame_count: frame_count.max(1),
            frame_duration: 1.0 / fps,
            looping,
        }
    }

    /// Create a looping animation
    pub fn looping(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, true)
    }

    /// Create a one-shot animation (plays once)
    pub fn one_shot(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, false)
    }

    /// Get the total duration of one animation cycle
    pub fn total_duration(&self) -> f32 {
        self.frame_count as f32 * self.frame_duration
    }

    /// Time at which the middle frame starts
    pub fn midpoint(&self) -> f32 {
        (self.frame_count / 2) as f32 * self.frame_duration
    }
}

/// Manages animation playback for an entity
#[derive(Debug)]
pub struct AnimationPlayer {
    /// All available animations
    animations: HashMap<String, AnimationClip>,
    /// Currently playing animation name
    current_animation: String,
    /// Current frame index
    current_frame: usize,
    /// Time elapsed in current frame
    frame_timer: f32,
    /// Whether the animation is playing
    playing: bool,
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self {
            animations: HashMap::new(),
            current_animation: String::new(),
            current_frame: 0,
            frame_timer: 0.0,
            playing: true,
        }
    }

    /// Create an animation player with the player's clips
    pub fn with_player_animations() -> Self {
        let mut player = Self::new();

        player.add_animation(AnimationClip::looping("idle", 4, 6.0));
        player.add_animation(AnimationClip::looping("run", 4, 10.0));
        player.add_animation(AnimationClip::looping("jump", 1, 10.0));
        player.add_animation(AnimationClip::looping("fall", 1, 10.0));
        // The chakram leaves the hand on frame 2 of 4
        player.add_animation(AnimationClip::one_shot("attack", 4, 12.0));
        player.add_animation(AnimationClip::one_shot("jump_attack", 4, 12.0));
        player.add_animation(AnimationClip::looping("damage", 2, 8.0));
        player.add_animation(AnimationClip::looping("dying", 4, 8.0));
        player.add_animation(AnimationClip::looping("swim", 4, 8.0));

        player.play("idle");
        player
    }

    /// Create an animation player with the enemy's clips
    pub fn with_enemy_animations() -> Self {
        let mut player = Self::new();
        player.add_animation(AnimationClip::looping("walk", 4, 8.0));
        player.add_animation(AnimationClip::looping("hurt", 2, 12.0));
        player.play("walk");
        player
    }

    /// Add an animation clip
    pub fn add_animation(&mut self, clip: AnimationClip) {
        self.animations.insert(clip.name.clone(), clip);
    }

    /// Play an animation by name
    pub fn play(&mut self, name: &str) {
        if self.current_animation != name {
            self.play_from_start(name);
        }
    }

    /// Play an animation from the beginning, even if it's the same
    pub fn play_from_start(&mut self, name: &str) {
        self.current_animation = name.to_string();
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.playing = true;
    }

    /// Switch to another clip without resetting the playhead.
    ///
    /// Used when a jump attack lands: the throw carries on as a ground attack.
    pub fn continue_as(&mut self, name: &str) {
        self.current_animation = name.to_string();
    }

    /// Update the animation (called every tick)
    pub fn update(&mut self, dt: f32) {
        if !self.playing {
            return;
        }

        let Some(clip) = self.animations.get(&self.current_animation) else {
            return;
        };

        self.frame_timer += dt;

        while self.frame_timer >= clip.frame_duration {
            self.frame_timer -= clip.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= clip.frame_count {
                if clip.looping {
                    self.current_frame = 0;
                } else {
                    // Stay on last frame
                    self.current_frame = clip.frame_count - 1;
                    self.frame_timer = 0.0;
                    self.playing = false;
                    break;
                }
            }
        }
    }

    /// Get the current animation name
    pub fn current_animation(&self) -> &str {
        &self.current_animation
    }

    /// Get the current frame index
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Check if the animation is playing
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Check if the current animation has finished (for non-looping animations)
    pub fn is_finished(&self) -> bool {
        match self.current_clip() {
            Some(clip) => !clip.looping && !self.playing,
            None => true,
        }
    }

    /// Time elapsed since the clip started (one cycle for looping clips)
    pub fn elapsed(&self) -> f32 {
        match self.current_clip() {
            Some(clip) if self.is_finished() => clip.total_duration(),
            Some(clip) => self.current_frame as f32 * clip.frame_duration + self.frame_timer,
            None => 0.0,
        }
    }

    /// Check if the playhead has reached the middle frame of the clip
    pub fn past_midpoint(&self) -> bool {
        self.current_clip()
            .map(|clip| self.elapsed() >= clip.midpoint())
            .unwrap_or(false)
    }

    /// Get the clip info for the current animation
    pub fn current_clip(&self) -> Option<&AnimationClip> {
        self.animations.get(&self.current_animation)
    }
}
