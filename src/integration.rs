//! End-to-end allocation scenarios exercising the quantizer, bitmap, pool,
//! and coalescing paths together.
