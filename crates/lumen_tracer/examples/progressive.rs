//! Progressive path tracer demo.
//!
//! Renders a randomized sphere field, refining the image one full-canvas
//! sample at a time, and saves the result as PNG.
//!
//! Run with `RUST_LOG=debug` to see per-sample timings.

use lumen_tracer::{
    Camera, CameraConfig, Material, RenderConfig, Renderer, Sampler, Sphere, SurfaceList, Vec3,
};

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 768;
const SAMPLES: u32 = 64;

fn main() {
    env_logger::init();

    let mut scene_sampler = Sampler::new(0x5eed);
    let scene = build_scene(&mut scene_sampler);
    println!("Created {} surfaces", scene.len());

    let look_from = Vec3::new(6.0, 1.5, 3.0);
    let look_at = Vec3::new(2.0, 1.0, 0.0);
    let camera = Camera::new(&CameraConfig {
        look_from,
        look_at,
        vup: Vec3::Y,
        vfov: 70.0,
        aspect_ratio: WIDTH as f32 / HEIGHT as f32,
        aperture: 0.04,
        focus_dist: (look_from - look_at).length(),
    })
    .expect("camera basis is well-formed");

    let mut renderer =
        Renderer::new(WIDTH, HEIGHT, RenderConfig::default()).expect("canvas is non-empty");

    println!("Rendering {}x{} @ {} progressive samples...", WIDTH, HEIGHT, SAMPLES);
    let start = std::time::Instant::now();
    for _ in 0..SAMPLES {
        renderer.render_sample(&scene, &camera);
    }
    println!("Rendered in {:?}", start.elapsed());

    let image = image::RgbaImage::from_raw(WIDTH, HEIGHT, renderer.to_rgba8())
        .expect("film resolves to a full canvas");
    image.save("progressive.png").expect("Failed to save image");
    println!("Saved to progressive.png");
}

/// Ground sphere, a randomized field of small spheres and three feature
/// spheres.
fn build_scene(sampler: &mut Sampler) -> SurfaceList {
    let mut scene = SurfaceList::new();

    // Ground
    scene.add(Box::new(Sphere::new(
        Vec3::new(0.0, -1000.0, -2.0),
        1000.0,
        Material::Diffuse {
            albedo: Vec3::new(0.35, 0.15, 0.35),
        },
    )));

    // Field of small spheres
    for i in 1..7 {
        for j in 0..8 {
            let (i, j) = (i as f32, j as f32);
            let choose_mat = sampler.sample();
            let center = Vec3::new(
                i + 0.9 * sampler.sample_range(-(j + i), j),
                0.2,
                j + 0.9 * sampler.sample_range(-(i + j), j),
            );

            // Keep clear of the metal feature sphere
            if (center - Vec3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let material = if choose_mat < 0.2 {
                Material::reflective(
                    Vec3::new(
                        0.5 * (sampler.sample() + sampler.sample()),
                        0.5 * (sampler.sample() + sampler.sample()),
                        0.5 * (sampler.sample() + sampler.sample()),
                    ),
                    sampler.sample(),
                )
            } else if choose_mat < 0.7 {
                Material::Diffuse {
                    albedo: Vec3::new(
                        sampler.sample() * sampler.sample(),
                        sampler.sample() * sampler.sample(),
                        sampler.sample() * sampler.sample(),
                    ),
                }
            } else {
                Material::Refractive {
                    refraction_index: 1.0 + sampler.sample(),
                }
            };

            scene.add(Box::new(Sphere::new(center, 0.2, material)));
        }
    }

    // Three feature spheres
    scene.add(Box::new(Sphere::new(
        Vec3::new(0.0, 1.0, 0.0),
        1.0,
        Material::Refractive {
            refraction_index: 1.5,
        },
    )));
    scene.add(Box::new(Sphere::new(
        Vec3::new(-4.0, 1.0, 0.0),
        1.0,
        Material::Diffuse {
            albedo: Vec3::new(0.4, 0.2, 0.1),
        },
    )));
    scene.add(Box::new(Sphere::new(
        Vec3::new(4.0, 1.0, 0.0),
        1.0,
        Material::reflective(Vec3::new(0.7, 0.6, 0.5), 0.15),
    )));

    scene
}
