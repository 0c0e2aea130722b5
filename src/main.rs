//! Headless paddle demo entry point
//!
//! Runs the paddle rig at a fixed timestep with a toy ball: the demo driver
//! steers through the control device, the loop delivers contact and power-up
//! events, and the paddle's signals drive the ball back.

use glam::Vec2;

use paddle_core::PaddleTuning;
use paddle_core::consts::SIM_DT;
use paddle_core::demo::DemoDriver;
use paddle_core::sim::{
    ContactEvent, EffectDescriptor, FixedViewport, PaddleController, PaddleEvent, PaddleSignal,
    SliderState, ViewportMetrics,
};

struct Ball {
    pos: Vec2,
    vel: Vec2,
}

fn main() {
    env_logger::init();
    log::info!("paddle demo starting...");

    let viewport = ViewportMetrics::new(1920.0, 1080.0, 5.0);
    let mut paddle = PaddleController::builder()
        .control(SliderState::new())
        .viewport(FixedViewport(viewport))
        .tuning(PaddleTuning::default())
        .build()
        .expect("paddle rig configuration");

    let mut driver = DemoDriver::new(42);
    let mut ball = Ball {
        pos: Vec2::ZERO,
        vel: Vec2::ZERO,
    };
    let mut launched = false;

    let wall_x = viewport.camera_width() / 2.0;
    let ceiling_y = viewport.vertical_half_extent;
    let floor_y = -viewport.vertical_half_extent;

    // Two pickups in quick succession around t=5s exercise the
    // supersede-and-revert path
    let first_powerup = (5.0 / SIM_DT) as u32;
    let second_powerup = (5.5 / SIM_DT) as u32;

    let total_ticks = (20.0 / SIM_DT) as u32;
    for tick_index in 0..total_ticks {
        let t = tick_index as f32 * SIM_DT;

        let falling = launched && ball.vel.y < 0.0;
        let target = driver.tick(SIM_DT, paddle.bounds(), falling.then_some(ball.pos.x));
        paddle.auto_move(target);
        paddle.tick(SIM_DT);

        if tick_index == first_powerup {
            paddle.on_event(PaddleEvent::PowerUp(EffectDescriptor {
                factor: 2.0,
                duration: 4.0,
            }));
        }
        if tick_index == second_powerup {
            paddle.on_event(PaddleEvent::PowerUp(EffectDescriptor {
                factor: 3.0,
                duration: 4.0,
            }));
        }

        let geometry = *paddle.geometry();
        if launched {
            ball.pos += ball.vel * SIM_DT;

            if ball.pos.x.abs() > wall_x {
                ball.vel.x = -ball.vel.x;
                ball.pos.x = ball.pos.x.clamp(-wall_x, wall_x);
            }
            if ball.pos.y > ceiling_y {
                ball.vel.y = -ball.vel.y;
                ball.pos.y = ceiling_y;
            }

            let on_paddle_line = ball.vel.y < 0.0 && ball.pos.y <= geometry.vertical_y;
            if on_paddle_line
                && (ball.pos.x - geometry.center_x).abs() <= paddle.colliders().solid / 2.0
            {
                paddle.on_event(PaddleEvent::Solid(ContactEvent {
                    contact_x: ball.pos.x,
                    velocity: ball.vel,
                }));
            } else if ball.pos.y < floor_y {
                log::info!("ball lost at t={t:.2}s; resetting round");
                paddle.reset();
                launched = false;
                ball.vel = Vec2::ZERO;
            }
        } else {
            // Serve phase: the ball rides on the paddle
            ball.pos = Vec2::new(geometry.center_x, geometry.vertical_y + 0.2);
        }

        for signal in paddle.take_signals() {
            match signal {
                PaddleSignal::LaunchRequested => {
                    launched = true;
                    ball.vel = Vec2::new(1.5, 6.0);
                    log::info!("launch requested at t={t:.2}s");
                }
                PaddleSignal::Deflected(velocity) => {
                    ball.vel = velocity;
                    ball.pos.y = geometry.vertical_y + 0.05;
                    log::debug!("deflected at t={t:.2}s, new velocity {velocity}");
                }
            }
        }
    }

    log::info!("paddle demo finished");
}
