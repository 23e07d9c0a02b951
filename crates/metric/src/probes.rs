//! Probe identifiers discovered from the scorecard probe catalog.
//!
//! Generated by `weighsum-codegen`. Do not edit by hand; rerun the generator instead.

/// Probe identifiers in catalog discovery order.
pub const PROBE_NAMES: &[&str] = &[
	"archived",
	"blocksDeleteOnBranches",
	"blocksForcePushOnBranches",
	"branchProtectionAppliesToAdmins",
	"branchesAreProtected",
	"codeApproved",
	"codeReviewOneReviewers",
	"contributorsFromOrgOrCompany",
	"createdRecently",
	"dependencyUpdateToolConfigured",
	"dismissesStaleReviews",
	"fuzzed",
	"hasBinaryArtifacts",
	"hasDangerousWorkflowScriptInjection",
	"hasDangerousWorkflowUntrustedCheckout",
	"hasFSFOrOSIApprovedLicense",
	"hasLicenseFile",
	"hasNoGitHubWorkflowPermissionUnknown",
	"hasOSVVulnerabilities",
	"hasOpenSSFBadge",
	"hasPermissiveLicense",
	"hasRecentCommits",
	"hasReleaseSBOM",
	"hasSBOM",
	"hasUnverifiedBinaryArtifacts",
	"issueActivityByProjectMember",
	"jobLevelPermissions",
	"packagedWithAutomatedWorkflow",
	"pinsDependencies",
	"releasesAreSigned",
	"releasesHaveProvenance",
	"releasesHaveVerifiedProvenance",
	"requiresApproversForPullRequests",
	"requiresCodeOwnersReview",
	"requiresLastPushApproval",
	"requiresPRsToChangeCode",
	"requiresUpToDateBranches",
	"runsStatusChecksBeforeMerging",
	"sastToolConfigured",
	"sastToolRunsOnAllCommits",
	"securityPolicyContainsLinks",
	"securityPolicyContainsText",
	"securityPolicyContainsVulnerabilityDisclosure",
	"securityPolicyPresent",
	"testsRunInCI",
	"topLevelPermissions",
	"unsafeblock",
	"webhooksUseSecrets",
];
