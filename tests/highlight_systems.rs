use bevy::prelude::*;

use die_core::geometry::{to_dquat, to_dvec3, to_quat};
use die_core::highlight::closest_face;
use die_core::roll::target_orientation;
use icosa_die::utils::highlight::update_highlight;
use icosa_die::utils::objects::{
    Die, DieCamera, DieHighlight, DieSettings, DieVisuals, HighlightOverlay, to_color,
};
use icosa_die::utils::setup::{create_die_materials, spawn_die};

#[derive(Resource)]
struct SpawnedDie(Entity);

fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    settings: Res<DieSettings>,
) {
    let die_materials = create_die_materials(&settings.0, &mut materials);
    let die = spawn_die(
        &mut commands,
        &mut meshes,
        &mut materials,
        &mut images,
        &die_materials,
        &settings.0,
        Vec3::ZERO,
    );
    commands.insert_resource(die_materials);
    commands.insert_resource(SpawnedDie(die));

    let camera = Transform::from_xyz(0.0, 0.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y);
    commands.spawn((camera, GlobalTransform::from(camera), DieCamera));
}

fn test_app() -> (App, Entity) {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default()))
        .init_asset::<Mesh>()
        .init_asset::<StandardMaterial>()
        .init_asset::<Image>()
        .init_resource::<DieSettings>()
        .add_systems(Startup, spawn_scene)
        .add_systems(Update, update_highlight);
    app.update();
    let die = app.world().resource::<SpawnedDie>().0;
    (app, die)
}

fn overlays(app: &mut App) -> Vec<Entity> {
    let mut query = app.world_mut().query_filtered::<Entity, With<HighlightOverlay>>();
    query.iter(app.world()).collect()
}

fn label_state(app: &App, die: Entity, face: usize) -> (Vec3, Color) {
    let world = app.world();
    let label = world.get::<DieVisuals>(die).expect("visuals").labels[face];
    let scale = world.get::<Transform>(label).expect("label transform").scale;
    let material = world
        .get::<MeshMaterial3d<StandardMaterial>>(label)
        .expect("label material");
    let color = world
        .resource::<Assets<StandardMaterial>>()
        .get(&material.0)
        .expect("material asset")
        .base_color;
    (scale, color)
}

fn face_mesh(app: &App, die: Entity, face: usize) -> Handle<Mesh> {
    app.world().get::<DieVisuals>(die).expect("visuals").face_meshes[face].clone()
}

#[test]
fn highlight_follows_the_front_face_with_a_single_overlay() {
    let (mut app, die) = test_app();
    let highlight = app.world().resource::<DieSettings>().0.highlight.clone();

    // The face looking at the camera in the spawn pose
    let faces = app.world().get::<Die>(die).expect("die").faces.clone();
    let rotation = app.world().get::<Transform>(die).expect("die transform").rotation;
    let (first, _) =
        closest_face(faces.normals(), to_dquat(rotation), to_dvec3(Vec3::NEG_Z)).expect("faces");

    assert_eq!(
        app.world().get::<DieHighlight>(die).expect("highlight").state.current(),
        Some(first)
    );
    let overlay = overlays(&mut app);
    assert_eq!(overlay.len(), 1);
    assert_eq!(
        app.world().get::<ChildOf>(overlay[0]).map(|child_of| child_of.parent()),
        Some(die)
    );
    assert_eq!(
        app.world().get::<Mesh3d>(overlay[0]).expect("overlay mesh").0,
        face_mesh(&app, die, first)
    );
    assert_eq!(
        label_state(&app, die, first),
        (Vec3::splat(highlight.label_scale), to_color(highlight.label_color))
    );

    // Turn another face to the camera
    let second = (first + 5) % faces.len();
    let target = to_quat(target_orientation(&faces.faces()[second], to_dvec3(Vec3::Z)));
    app.world_mut().get_mut::<Transform>(die).expect("die transform").rotation = target;
    app.update();

    assert_eq!(
        app.world().get::<DieHighlight>(die).expect("highlight").state.current(),
        Some(second)
    );
    assert_eq!(overlays(&mut app), overlay);
    assert_eq!(
        app.world().get::<Mesh3d>(overlay[0]).expect("overlay mesh").0,
        face_mesh(&app, die, second)
    );
    assert_eq!(
        label_state(&app, die, first),
        (Vec3::ONE, to_color(highlight.baseline_label_color))
    );
    assert_eq!(
        label_state(&app, die, second),
        (Vec3::splat(highlight.label_scale), to_color(highlight.label_color))
    );

    // No change, nothing respawned
    app.update();
    assert_eq!(overlays(&mut app), overlay);
}
