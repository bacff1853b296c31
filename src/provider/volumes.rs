//! Volume ID extraction
//!
//! The machine controller asks the driver which of a node's persistent
//! volumes are Alicloud disks so it can wait for them to detach before
//! deleting the machine.

use k8s_openapi::api::core::v1::PersistentVolumeSpec;

use alicloud_common::ALICLOUD_CSI_DRIVER_NAME;

/// FlexVolume driver used by clusters predating the CSI plugin
pub const ALICLOUD_FLEX_DRIVER_NAME: &str = "alicloud/disk";

const FLEX_VOLUME_ID_OPTION: &str = "volumeId";

/// Collect the Alicloud disk IDs referenced by the given volume specs
///
/// Volumes served by other drivers are skipped.
pub fn volume_ids(specs: &[PersistentVolumeSpec]) -> Vec<String> {
    specs
        .iter()
        .filter_map(|spec| {
            if let Some(ref flex) = spec.flex_volume {
                if flex.driver == ALICLOUD_FLEX_DRIVER_NAME {
                    return flex
                        .options
                        .as_ref()
                        .and_then(|o| o.get(FLEX_VOLUME_ID_OPTION))
                        .cloned();
                }
            }
            spec.csi
                .as_ref()
                .filter(|csi| {
                    csi.driver == ALICLOUD_CSI_DRIVER_NAME && !csi.volume_handle.is_empty()
                })
                .map(|csi| csi.volume_handle.clone())
        })
        .collect()
}
