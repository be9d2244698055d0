use glam::{Affine3A, Quat, Vec3};
use rapier3d::{dynamics::RigidBodyMassProps, na};

#[inline]
/// Convert a controller pose supplied by the host into a [`glam::Affine3A`]
pub fn affine_from_pose(
    position: mint::Vector3<f32>,
    orientation: mint::Quaternion<f32>,
) -> Affine3A {
    let translation: Vec3 = position.into();
    let rotation: Quat = orientation.into();

    Affine3A::from_rotation_translation(rotation, translation)
}

#[inline]
/// Build a [`rapier3d::na::Isometry3`] from rotation and translation parts
pub fn isometry_from_rotation_translation(rotation: Quat, translation: Vec3) -> na::Isometry3<f32> {
    na::Isometry3::from_parts(
        na::Translation3::new(translation.x, translation.y, translation.z),
        na_rotation_from_glam(rotation),
    )
}

#[inline]
/// Convert a [`glam::Quat`] into a [`rapier3d::na::UnitQuaternion`]
pub fn na_rotation_from_glam(r: Quat) -> na::UnitQuaternion<f32> {
    na::UnitQuaternion::new_unchecked([r.x, r.y, r.z, r.w].into())
}

#[inline]
/// Decompose a [`rapier3d::na::Isometry3`] into its rotation and translation components
pub fn decompose_isometry(i: &na::Isometry3<f32>) -> (Quat, Vec3) {
    (
        Quat::from_array(i.rotation.quaternion().coords.data.0[0]),
        mint::Vector3::from(i.translation.vector.data.0[0]).into(),
    )
}

#[inline]
/// Convert a [`glam::Vec3`] into a [`rapier3d::na::Vector3`]
pub fn na_vector_from_glam(v: Vec3) -> na::Vector3<f32> {
    [v.x, v.y, v.z].into()
}

#[inline]
/// Convert a [`rapier3d::na::Vector3`] into a [`glam::Vec3`]
pub fn glam_vec_from_na(v: &na::Vector3<f32>) -> Vec3 {
    [v.x, v.y, v.z].into()
}

/// The principal moments of inertia of a rigid body, in its mass space.
///
/// Locked or massless axes come back as zero rather than infinity.
pub fn principal_inertia(mass_properties: &RigidBodyMassProps) -> Vec3 {
    let inv_sqrt = mass_properties.local_mprops.inv_principal_inertia_sqrt;
    Vec3::new(
        recip_squared(inv_sqrt.x),
        recip_squared(inv_sqrt.y),
        recip_squared(inv_sqrt.z),
    )
}

#[inline]
fn recip_squared(inv_sqrt: f32) -> f32 {
    if inv_sqrt != 0.0 {
        1.0 / (inv_sqrt * inv_sqrt)
    } else {
        0.0
    }
}
