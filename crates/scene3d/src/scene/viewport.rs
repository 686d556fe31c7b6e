//! Stage sizing inside a device viewport
//!
//! With aspect ratio kept, the stage is scaled to fit the device in its
//! longest dimension and the shorter dimension is lengthened to fill the
//! device. Half of the lengthening lands on each side as a gutter.

/// Resolved stage size and gutters for one device size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Requested stage width
    pub stage_width: f32,
    /// Requested stage height
    pub stage_height: f32,
    /// Whether the stage aspect ratio is preserved
    pub keep_aspect_ratio: bool,
    /// Device viewport width in pixels
    pub device_width: f32,
    /// Device viewport height in pixels
    pub device_height: f32,
    /// Effective stage width including gutters
    pub width: f32,
    /// Effective stage height including gutters
    pub height: f32,
    /// Padding added on each of the left and right sides, in stage units
    pub gutter_width: f32,
    /// Padding added on each of the top and bottom sides, in stage units
    pub gutter_height: f32,
}

impl Viewport {
    /// Fit a stage into a device viewport
    pub fn compute(
        stage_width: f32,
        stage_height: f32,
        keep_aspect_ratio: bool,
        device_width: f32,
        device_height: f32,
    ) -> Self {
        let mut viewport = Self {
            stage_width,
            stage_height,
            keep_aspect_ratio,
            device_width,
            device_height,
            width: stage_width,
            height: stage_height,
            gutter_width: 0.0,
            gutter_height: 0.0,
        };
        if !keep_aspect_ratio {
            return viewport;
        }

        if device_height / device_width < stage_height / stage_width {
            // Device is wider than the stage: pad width
            let to_device = device_height / stage_height;
            let to_stage = stage_height / device_height;
            let scaled_width = stage_width * to_device;
            let lengthen = (device_width - scaled_width) * to_stage;
            viewport.width = stage_width + lengthen;
            viewport.gutter_width = lengthen / 2.0;
        } else {
            // Device is narrower than (or as wide as) the stage: pad height
            let to_device = device_width / stage_width;
            let to_stage = stage_width / device_width;
            let scaled_height = stage_height * to_device;
            let lengthen = (device_height - scaled_height) * to_stage;
            viewport.height = stage_height + lengthen;
            viewport.gutter_height = lengthen / 2.0;
        }
        viewport
    }

    /// Convert device pixel coordinates to stage coordinates
    pub fn to_stage(&self, device_x: f32, device_y: f32) -> (f32, f32) {
        if self.device_width <= 0.0 || self.device_height <= 0.0 {
            return (device_x, device_y);
        }
        (
            device_x * self.width / self.device_width,
            device_y * self.height / self.device_height,
        )
    }
}
