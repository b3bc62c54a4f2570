use gloo_timers::callback::Timeout;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use wasm_bindgen::JsValue;
use web_sys::{window, Element};

const PARTICLE_COUNT: usize = 80;
const BURST_DURATION_MS: u32 = 3200;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn current() -> Option<Self> {
        let window = window()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some(Self { width, height })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub drift: f64,
    pub fall: f64,
    pub size: f64,
    pub spin: f64,
    pub delay: f64,
    pub duration: f64,
    pub color: String,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left:{:.0}px;top:-12px;width:{:.0}px;height:{:.0}px;background:{};\
             --confetti-drift:{:.0}px;--confetti-fall:{:.0}px;--confetti-spin:{:.0}deg;\
             animation-duration:{:.2}s;animation-delay:{:.2}s",
            self.x, self.size, self.size * 0.6, self.color, self.drift, self.fall, self.spin,
            self.duration, self.delay
        )
    }
}

/// Lays out one burst across the viewport. Every particle finishes within
/// the burst duration.
pub fn burst<R: Rng>(viewport: Viewport, palette: &[String], rng: &mut R) -> Vec<Particle> {
    if palette.is_empty() || viewport.width <= 0.0 || viewport.height <= 0.0 {
        return Vec::new();
    }
    let max_seconds = BURST_DURATION_MS as f64 / 1000.0;
    (0..PARTICLE_COUNT)
        .map(|i| {
            let delay = rng.gen_range(0.0..0.5);
            Particle {
                x: rng.gen_range(0.0..viewport.width),
                drift: rng.gen_range(-120.0..120.0),
                fall: viewport.height + 24.0,
                size: rng.gen_range(6.0..12.0),
                spin: rng.gen_range(180.0..900.0),
                delay,
                duration: rng.gen_range(1.6..(max_seconds - delay)),
                color: palette[i % palette.len()].clone(),
            }
        })
        .collect()
}

/// A node added by a burst that can take itself out of the page.
trait BurstNode {
    fn detach(&self);
}

impl BurstNode for Element {
    fn detach(&self) {
        self.remove();
    }
}

/// Removes the nodes of one burst, leaving anything else in the container.
fn clear_burst<N: BurstNode>(nodes: &[N]) {
    for node in nodes {
        node.detach();
    }
}

/// Renders a one-shot burst into `container` and removes its particles
/// afterwards. Overlapping bursts each clear only their own particles.
pub fn spawn_confetti(container: &Element, viewport: Viewport, palette: &[String]) {
    if let Err(e) = try_spawn(container, viewport, palette) {
        log::warn!("Confetti unavailable: {:?}", e);
    }
}

fn try_spawn(container: &Element, viewport: Viewport, palette: &[String]) -> Result<(), JsValue> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let mut rng = SmallRng::from_entropy();
    let particles = burst(viewport, palette, &mut rng);
    let mut nodes = Vec::with_capacity(particles.len());
    for particle in particles {
        let el = document.create_element("div")?;
        el.set_class_name("confetti-particle");
        el.set_attribute("style", &particle.style())?;
        container.append_child(&el)?;
        nodes.push(el);
    }

    Timeout::new(BURST_DURATION_MS, move || clear_burst(&nodes)).forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FakeNode {
        id: u32,
        live: Rc<RefCell<Vec<u32>>>,
    }

    impl BurstNode for FakeNode {
        fn detach(&self) {
            self.live.borrow_mut().retain(|id| *id != self.id);
        }
    }

    fn palette() -> Vec<String> {
        vec!["#FF6B00".to_string(), "#FFB366".to_string()]
    }

    #[test]
    fn test_burst_stays_inside_viewport_and_duration() {
        let viewport = Viewport { width: 800.0, height: 600.0 };
        let mut rng = StdRng::seed_from_u64(9);
        let particles = burst(viewport, &palette(), &mut rng);
        assert_eq!(particles.len(), PARTICLE_COUNT);
        for p in &particles {
            assert!(p.x >= 0.0 && p.x < 800.0);
            assert!(p.delay + p.duration <= BURST_DURATION_MS as f64 / 1000.0 + 1e-9);
            assert!(palette().contains(&p.color));
        }
    }

    #[test]
    fn test_empty_palette_or_viewport_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(burst(Viewport { width: 800.0, height: 600.0 }, &[], &mut rng).is_empty());
        assert!(burst(Viewport { width: 0.0, height: 600.0 }, &palette(), &mut rng).is_empty());
    }

    #[test]
    fn test_clearing_a_burst_keeps_later_burst() {
        let live = Rc::new(RefCell::new(Vec::new()));
        let spawn = |ids: std::ops::Range<u32>| -> Vec<FakeNode> {
            ids.map(|id| {
                live.borrow_mut().push(id);
                FakeNode { id, live: live.clone() }
            })
            .collect()
        };
        let first = spawn(0..3);
        let second = spawn(3..6);

        clear_burst(&first);
        assert_eq!(*live.borrow(), vec![3, 4, 5]);

        clear_burst(&second);
        assert!(live.borrow().is_empty());
    }
}
