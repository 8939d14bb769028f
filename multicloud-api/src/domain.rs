/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// CloudStack domain records
pub mod cloudstack;

/// Amazon S3 access control and logging payloads
pub mod s3;
